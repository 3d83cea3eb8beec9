use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::report::entities::{Rating, WeeklyLog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum NutritionVerdict {
    Good,
    Okay,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl NutritionVerdict {
    pub fn from_average(average: f64) -> Self {
        if average > 2.5 {
            NutritionVerdict::Good
        } else if average > 1.5 {
            NutritionVerdict::Okay
        } else {
            NutritionVerdict::NeedsImprovement
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MoodVerdict {
    Positive,
    Neutral,
    Low,
}

impl MoodVerdict {
    pub fn from_average(average: f64) -> Self {
        if average > 2.5 {
            MoodVerdict::Positive
        } else if average > 1.5 {
            MoodVerdict::Neutral
        } else {
            MoodVerdict::Low
        }
    }
}

/// A weekly log row with the labels the report shows next to each score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyLogEntry {
    pub day: String,
    #[schema(value_type = u8, minimum = 1, maximum = 3)]
    pub nutrition_score: Rating,
    pub nutrition_label: String,
    pub nutrition_emoji: String,
    #[schema(value_type = u8, minimum = 1, maximum = 3)]
    pub mood_trend: Rating,
    pub mood_label: String,
    pub mood_emoji: String,
}

impl From<WeeklyLog> for WeeklyLogEntry {
    fn from(log: WeeklyLog) -> Self {
        Self {
            nutrition_label: log.nutrition_score.label().to_string(),
            nutrition_emoji: log.nutrition_score.nutrition_emoji().to_string(),
            mood_label: log.mood_trend.label().to_string(),
            mood_emoji: log.mood_trend.mood_emoji().to_string(),
            day: log.day,
            nutrition_score: log.nutrition_score,
            mood_trend: log.mood_trend,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub logs: Vec<WeeklyLogEntry>,
    pub overall_nutrition: f64,
    pub nutrition_verdict: NutritionVerdict,
    pub overall_mood: f64,
    pub mood_verdict: MoodVerdict,
    pub suggestions: Vec<String>,
}
