use chrono::NaiveDate;

use crate::domain::{
    common::entities::app_errors::CoreError,
    report::{
        entities::{DailyMood, ProfileStats, Rating, UserProfile, WeeklyLog},
        ports::ReportRepository,
    },
};

/// In-memory report data. Nothing is recorded between requests; the week and
/// the profile are fixed sample values.
#[derive(Debug, Clone, Default)]
pub struct StaticReportRepository;

impl StaticReportRepository {
    pub fn new() -> Self {
        Self
    }
}

const WEEKLY_LOGS: [(&str, Rating, Rating); 7] = [
    ("Monday", Rating::Good, Rating::Good),
    ("Tuesday", Rating::Bad, Rating::Bad),
    ("Wednesday", Rating::Neutral, Rating::Neutral),
    ("Thursday", Rating::Good, Rating::Neutral),
    ("Friday", Rating::Good, Rating::Good),
    ("Saturday", Rating::Bad, Rating::Neutral),
    ("Sunday", Rating::Neutral, Rating::Good),
];

const WEEKLY_MOOD: [(&str, i32); 7] = [
    ("Mon", 7),
    ("Tue", 5),
    ("Wed", 8),
    ("Thu", 6),
    ("Fri", 9),
    ("Sat", 8),
    ("Sun", 7),
];

impl ReportRepository for StaticReportRepository {
    async fn get_weekly_logs(&self) -> Result<Vec<WeeklyLog>, CoreError> {
        Ok(WEEKLY_LOGS
            .iter()
            .map(|(day, nutrition_score, mood_trend)| WeeklyLog {
                day: day.to_string(),
                nutrition_score: *nutrition_score,
                mood_trend: *mood_trend,
            })
            .collect())
    }

    async fn get_weekly_mood(&self) -> Result<Vec<DailyMood>, CoreError> {
        Ok(WEEKLY_MOOD
            .iter()
            .map(|(day, mood)| DailyMood {
                day: day.to_string(),
                mood: *mood,
            })
            .collect())
    }

    async fn get_profile(&self) -> Result<UserProfile, CoreError> {
        let join_date =
            NaiveDate::from_ymd_opt(2023, 10, 1).ok_or(CoreError::InternalServerError)?;

        Ok(UserProfile {
            name: "Alex Doe".to_string(),
            email: "alex.doe@example.com".to_string(),
            join_date,
            avatar: "https://picsum.photos/seed/user-profile/200/200".to_string(),
            goals: vec![
                "Improve Mood".to_string(),
                "Eat Healthier".to_string(),
                "Understand Nutrition".to_string(),
            ],
            stats: ProfileStats {
                scans: 42,
                streak: 7,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::services::build_weekly_report;
    use crate::domain::report::value_objects::{MoodVerdict, NutritionVerdict};

    #[tokio::test]
    async fn test_sample_week_summary() {
        let logs = StaticReportRepository::new().get_weekly_logs().await.unwrap();
        assert_eq!(logs.len(), 7);
        assert_eq!(logs[0].day, "Monday");

        // nutrition 15/7, mood 16/7
        let report = build_weekly_report(logs);
        assert_eq!(report.nutrition_verdict, NutritionVerdict::Okay);
        assert_eq!(report.mood_verdict, MoodVerdict::Neutral);
    }

    #[tokio::test]
    async fn test_sample_mood_chart_stays_on_scale() {
        let moods = StaticReportRepository::new().get_weekly_mood().await.unwrap();
        assert_eq!(moods.len(), 7);
        assert!(moods.iter().all(|m| (1..=10).contains(&m.mood)));
    }

    #[tokio::test]
    async fn test_sample_profile() {
        let profile = StaticReportRepository::new().get_profile().await.unwrap();
        assert_eq!(profile.stats.scans, 42);
        assert_eq!(
            serde_json::to_value(&profile).unwrap()["joinDate"],
            serde_json::json!("2023-10-01")
        );
    }
}
