use std::time::Duration;

use chrono::{DateTime, Utc};
use url::Url;
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

#[derive(Clone, Debug)]
pub struct NutrimoodConfig {
    pub llm: LLMConfig,
    pub action: ActionConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: Url,
    pub request_timeout: Duration,
}

/// Artificial latency applied by the action layer before each unit call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionConfig {
    pub image_analysis_delay: Duration,
    pub nutrition_delay: Duration,
    pub personalization_delay: Duration,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            image_analysis_delay: Duration::from_millis(1500),
            nutrition_delay: Duration::from_millis(1000),
            personalization_delay: Duration::from_millis(1000),
        }
    }
}

impl ActionConfig {
    pub fn without_delay() -> Self {
        Self {
            image_analysis_delay: Duration::ZERO,
            nutrition_delay: Duration::ZERO,
            personalization_delay: Duration::ZERO,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
