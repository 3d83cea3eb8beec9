use super::handlers::personalize_mood_impact::{
    __path_personalize_mood_impact, personalize_mood_impact,
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(personalize_mood_impact))]
pub struct MoodImpactApiDoc;

pub fn mood_impact_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/mood-impact/personalize", state.args.server.root_path),
        post(personalize_mood_impact),
    )
}
