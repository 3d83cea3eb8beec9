use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::entities::FoodAnalysis,
    mood_impact::{entities::PersonalizedMoodImpact, value_objects::PersonalizedMoodImpactInput},
    nutrition::entities::NutritionalAnalysis,
};

pub const IMAGE_ANALYSIS_NO_RESULT: &str = "Image analysis returned no result.";
pub const NUTRITION_NO_RESULT: &str = "Nutritional analysis returned no result.";
pub const PERSONALIZATION_NO_RESULT: &str =
    "Personalized mood impact analysis returned no result.";

/// Caller-facing wrappers around the units: a fixed delay first, then a
/// missing result is turned into [`CoreError::NoResult`].
#[cfg_attr(test, mockall::automock)]
pub trait ActionService: Send + Sync {
    fn analyze_food_image_action(
        &self,
        photo_data_uri: String,
    ) -> impl Future<Output = Result<FoodAnalysis, CoreError>> + Send;

    fn analyze_nutrition_action(
        &self,
        food_name: String,
    ) -> impl Future<Output = Result<NutritionalAnalysis, CoreError>> + Send;

    fn get_personalized_mood_impact_action(
        &self,
        input: PersonalizedMoodImpactInput,
    ) -> impl Future<Output = Result<PersonalizedMoodImpact, CoreError>> + Send;
}
