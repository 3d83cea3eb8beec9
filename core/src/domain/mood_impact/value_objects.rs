use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_analysis::entities::FoodAnalysis;

pub const MIN_MOOD_SCORE: i32 = 1;
pub const MAX_MOOD_SCORE: i32 = 10;
pub const DEFAULT_MOOD_SCORE: i32 = 5;

/// Clamp a self-reported mood onto the 1..=10 slider scale.
pub fn clamp_mood_score(score: i32) -> i32 {
    score.clamp(MIN_MOOD_SCORE, MAX_MOOD_SCORE)
}

/// Inputs of the Personalization Unit. The mood score is passed through as
/// reported; range checks belong to whoever collects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedMoodImpactInput {
    pub food_description: String,
    pub mood_score: i32,
    pub nutrition_data: String,
}

impl PersonalizedMoodImpactInput {
    pub fn from_analysis(analysis: &FoodAnalysis, mood_score: i32) -> Self {
        Self {
            food_description: analysis.food_description(),
            mood_score,
            nutrition_data: analysis.nutrition_summary(),
        }
    }
}
