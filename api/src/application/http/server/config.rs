use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::app_state::AppState;

/// Public, non-secret view of the running configuration.
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub model: String,
    pub image_analysis_delay_ms: u64,
    pub nutrition_delay_ms: u64,
    pub personalization_delay_ms: u64,
}

pub async fn get_config(State(state): State<AppState>) -> Json<Config> {
    let action = state.service.action_config();

    Json(Config {
        model: state.args.llm.gemini_model.clone(),
        image_analysis_delay_ms: action.image_analysis_delay.as_millis() as u64,
        nutrition_delay_ms: action.nutrition_delay.as_millis() as u64,
        personalization_delay_ms: action.personalization_delay.as_millis() as u64,
    })
}
