use axum::extract::State;
use nutrimood_core::domain::{
    action::ports::ActionService, mood_impact::entities::PersonalizedMoodImpact,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    mood_impact::validators::PersonalizeMoodImpactRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonalizeMoodImpactResponse {
    pub data: PersonalizedMoodImpact,
}

#[utoipa::path(
    post,
    path = "/personalize",
    tag = "mood-impact",
    summary = "Personalize mood impact",
    description = "Explains how a meal likely affected the user's mood, combining its nutrition with a self-reported mood score",
    request_body = PersonalizeMoodImpactRequest,
    responses(
        (status = 200, body = PersonalizeMoodImpactResponse),
        (status = 422, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
)]
pub async fn personalize_mood_impact(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PersonalizeMoodImpactRequest>,
) -> Result<Response<PersonalizeMoodImpactResponse>, ApiError> {
    let impact = state
        .service
        .get_personalized_mood_impact_action(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PersonalizeMoodImpactResponse { data: impact }))
}
