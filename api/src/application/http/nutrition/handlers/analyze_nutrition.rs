use axum::extract::State;
use nutrimood_core::domain::{
    action::ports::ActionService, nutrition::entities::NutritionalAnalysis,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::validators::AnalyzeNutritionRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeNutritionResponse {
    pub data: NutritionalAnalysis,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "nutrition",
    summary = "Look up nutrition by food name",
    description = "Estimates calories, macronutrients and micronutrients for a named food",
    request_body = AnalyzeNutritionRequest,
    responses(
        (status = 200, body = AnalyzeNutritionResponse),
        (status = 422, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
)]
pub async fn analyze_nutrition(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeNutritionRequest>,
) -> Result<Response<AnalyzeNutritionResponse>, ApiError> {
    let analysis = state
        .service
        .analyze_nutrition_action(payload.food_name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeNutritionResponse { data: analysis }))
}
