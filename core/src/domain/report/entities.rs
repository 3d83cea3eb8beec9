use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Three-step score used by the weekly log: 1 (Bad), 2 (Neutral), 3 (Good).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    Bad = 1,
    Neutral = 2,
    Good = 3,
}

impl Rating {
    pub fn score(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Bad => "Bad",
            Rating::Neutral => "Neutral",
            Rating::Good => "Good",
        }
    }

    pub fn nutrition_emoji(&self) -> &'static str {
        match self {
            Rating::Good => "✅",
            Rating::Neutral => "⚠️",
            Rating::Bad => "❌",
        }
    }

    pub fn mood_emoji(&self) -> &'static str {
        match self {
            Rating::Good => "😄",
            Rating::Neutral => "😐",
            Rating::Bad => "😞",
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::Bad),
            2 => Ok(Rating::Neutral),
            3 => Ok(Rating::Good),
            other => Err(CoreError::Invalid(format!(
                "rating must be 1, 2 or 3, got {}",
                other
            ))),
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.score()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyLog {
    pub day: String,
    #[schema(value_type = u8, minimum = 1, maximum = 3)]
    pub nutrition_score: Rating,
    #[schema(value_type = u8, minimum = 1, maximum = 3)]
    pub mood_trend: Rating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailyMood {
    pub day: String,
    #[schema(minimum = 1, maximum = 10)]
    pub mood: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub scans: u32,
    pub streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub join_date: NaiveDate,
    pub avatar: String,
    pub goals: Vec<String>,
    pub stats: ProfileStats,
}
