use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeNutritionRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "foodName must be between 1 and 200 characters"
    ))]
    #[schema(example = "Greek yogurt")]
    pub food_name: String,
}
