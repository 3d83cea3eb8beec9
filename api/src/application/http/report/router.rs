use super::handlers::{
    get_weekly_mood::{__path_get_weekly_mood, get_weekly_mood},
    get_weekly_report::{__path_get_weekly_report, get_weekly_report},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_weekly_report, get_weekly_mood))]
pub struct ReportApiDoc;

pub fn report_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/reports/weekly", state.args.server.root_path),
            get(get_weekly_report),
        )
        .route(
            &format!("{}/reports/weekly/mood", state.args.server.root_path),
            get(get_weekly_mood),
        )
}
