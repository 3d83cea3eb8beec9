use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::app_state::AppState;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LiveResponse {
    pub status: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReadyResponse {
    pub status: String,
    pub version: String,
    pub model: String,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    responses((status = 200, body = LiveResponse)),
)]
pub async fn live() -> Json<LiveResponse> {
    Json(LiveResponse {
        status: "ok".to_string(),
    })
}

/// The service holds no connections, so readiness only reports what it would call.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses((status = 200, body = ReadyResponse)),
)]
pub async fn ready(State(state): State<AppState>) -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.args.llm.gemini_model.clone(),
    })
}

#[derive(OpenApi)]
#[openapi(paths(live, ready))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health/live", root_path), get(live))
        .route(&format!("{}/health/ready", root_path), get(ready))
}
