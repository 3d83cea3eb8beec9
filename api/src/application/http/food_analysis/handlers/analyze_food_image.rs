use axum::extract::State;
use nutrimood_core::domain::{action::ports::ActionService, food_analysis::entities::FoodAnalysis};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food_analysis::validators::AnalyzeFoodImageRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeFoodImageResponse {
    pub data: FoodAnalysis,
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "food-analysis",
    summary = "Analyze food from image",
    description = "Identifies the food items in a data-URI encoded photo and estimates macros and mood impact",
    request_body = AnalyzeFoodImageRequest,
    responses(
        (status = 200, body = AnalyzeFoodImageResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
)]
pub async fn analyze_food_image(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeFoodImageRequest>,
) -> Result<Response<AnalyzeFoodImageResponse>, ApiError> {
    let analysis = state
        .service
        .analyze_food_image_action(payload.photo_data_uri)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeFoodImageResponse { data: analysis }))
}
