use axum::extract::State;
use nutrimood_core::domain::report::{entities::DailyMood, ports::ReportService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetWeeklyMoodResponse {
    pub data: Vec<DailyMood>,
}

#[utoipa::path(
    get,
    path = "/weekly/mood",
    tag = "report",
    summary = "Get the weekly mood chart",
    responses(
        (status = 200, body = GetWeeklyMoodResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn get_weekly_mood(
    State(state): State<AppState>,
) -> Result<Response<GetWeeklyMoodResponse>, ApiError> {
    let moods = ReportService::get_weekly_mood(&state.service)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetWeeklyMoodResponse { data: moods }))
}
