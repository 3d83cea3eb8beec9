use axum::extract::State;
use nutrimood_core::domain::report::{entities::UserProfile, ports::ReportService};
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
pub struct GetProfileResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    get,
    path = "/me",
    tag = "profile",
    summary = "Get the current profile",
    responses(
        (status = 200, body = GetProfileResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let profile = ReportService::get_profile(&state.service)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfileResponse { data: profile }))
}
