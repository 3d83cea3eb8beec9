use axum::extract::State;
use nutrimood_core::domain::report::{ports::ReportService, value_objects::WeeklyReport};
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
pub struct GetWeeklyReportResponse {
    pub data: WeeklyReport,
}

#[utoipa::path(
    get,
    path = "/weekly",
    tag = "report",
    summary = "Get the weekly report",
    description = "Daily nutrition and mood ratings for the week with averages, verdicts and suggestions",
    responses(
        (status = 200, body = GetWeeklyReportResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn get_weekly_report(
    State(state): State<AppState>,
) -> Result<Response<GetWeeklyReportResponse>, ApiError> {
    let report = state
        .service
        .get_weekly_report()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetWeeklyReportResponse { data: report }))
}
