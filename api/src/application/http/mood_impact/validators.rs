use nutrimood_core::domain::mood_impact::value_objects::PersonalizedMoodImpactInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizeMoodImpactRequest {
    #[validate(length(
        min = 1,
        max = 2000,
        message = "foodDescription must be between 1 and 2000 characters"
    ))]
    #[schema(example = "Cheeseburger, Fries")]
    pub food_description: String,

    #[validate(range(min = 1, max = 10, message = "moodScore must be between 1 and 10"))]
    #[schema(example = 3, minimum = 1, maximum = 10)]
    pub mood_score: i32,

    #[validate(length(max = 2000, message = "nutritionData must be at most 2000 characters"))]
    #[schema(example = "Calories: 850, Protein: 32g, Carbs: 90g, Fat: 45g")]
    pub nutrition_data: String,
}

impl From<PersonalizeMoodImpactRequest> for PersonalizedMoodImpactInput {
    fn from(request: PersonalizeMoodImpactRequest) -> Self {
        Self {
            food_description: request.food_description,
            mood_score: request.mood_score,
            nutrition_data: request.nutrition_data,
        }
    }
}
