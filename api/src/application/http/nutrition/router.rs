use super::handlers::analyze_nutrition::{__path_analyze_nutrition, analyze_nutrition};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_nutrition))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/nutrition/analyze", state.args.server.root_path),
        post(analyze_nutrition),
    )
}
