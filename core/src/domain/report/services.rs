use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    llm::ports::LLMClient,
    report::{
        entities::{DailyMood, Rating, UserProfile, WeeklyLog},
        ports::{ReportRepository, ReportService},
        value_objects::{MoodVerdict, NutritionVerdict, WeeklyLogEntry, WeeklyReport},
    },
};

const SUGGESTIONS: [&str; 3] = [
    "Try incorporating more leafy greens into your diet for a vitamin boost.",
    "Consider reducing processed sugars to avoid energy crashes and improve mood stability.",
    "Hydration is key! Aim for 8 glasses of water a day.",
];

fn average(ratings: impl Iterator<Item = Rating>) -> f64 {
    let (sum, count) = ratings.fold((0u32, 0u32), |(sum, count), rating| {
        (sum + u32::from(rating.score()), count + 1)
    });

    if count == 0 {
        return 0.0;
    }
    f64::from(sum) / f64::from(count)
}

/// Summarize a week of logs into averages, verdicts and suggestions.
pub fn build_weekly_report(logs: Vec<WeeklyLog>) -> WeeklyReport {
    let overall_nutrition = average(logs.iter().map(|log| log.nutrition_score));
    let overall_mood = average(logs.iter().map(|log| log.mood_trend));

    WeeklyReport {
        logs: logs.into_iter().map(WeeklyLogEntry::from).collect(),
        overall_nutrition,
        nutrition_verdict: NutritionVerdict::from_average(overall_nutrition),
        overall_mood,
        mood_verdict: MoodVerdict::from_average(overall_mood),
        suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}

impl<LLM, RR> ReportService for Service<LLM, RR>
where
    LLM: LLMClient,
    RR: ReportRepository,
{
    async fn get_weekly_report(&self) -> Result<WeeklyReport, CoreError> {
        let logs = self.report_repository.get_weekly_logs().await?;
        Ok(build_weekly_report(logs))
    }

    async fn get_weekly_mood(&self) -> Result<Vec<DailyMood>, CoreError> {
        self.report_repository.get_weekly_mood().await
    }

    async fn get_profile(&self) -> Result<UserProfile, CoreError> {
        self.report_repository.get_profile().await
    }
}
