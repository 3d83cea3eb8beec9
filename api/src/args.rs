use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use nutrimood_core::domain::common::{
    ActionConfig, DEFAULT_GEMINI_BASE_URL, LLMConfig, NutrimoodConfig,
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrimood-api", version, about = "NutriMood API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub action: ActionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:9002"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "ENABLE_METRICS", default_value_t = true, action = clap::ArgAction::Set)]
    pub enable_metrics: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: Url,

    #[arg(long, env = "LLM_REQUEST_TIMEOUT_SECS", default_value_t = 60)]
    pub llm_request_timeout_secs: u64,
}

/// Artificial latency before each action, in milliseconds.
#[derive(Debug, Clone, ClapArgs)]
pub struct ActionArgs {
    #[arg(long, env = "IMAGE_ANALYSIS_DELAY_MS", default_value_t = 1500)]
    pub image_analysis_delay_ms: u64,

    #[arg(long, env = "NUTRITION_DELAY_MS", default_value_t = 1000)]
    pub nutrition_delay_ms: u64,

    #[arg(long, env = "PERSONALIZATION_DELAY_MS", default_value_t = 1000)]
    pub personalization_delay_ms: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// `tracing_subscriber::EnvFilter` directives.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<ActionArgs> for ActionConfig {
    fn from(args: ActionArgs) -> Self {
        Self {
            image_analysis_delay: Duration::from_millis(args.image_analysis_delay_ms),
            nutrition_delay: Duration::from_millis(args.nutrition_delay_ms),
            personalization_delay: Duration::from_millis(args.personalization_delay_ms),
        }
    }
}

impl From<LlmArgs> for LLMConfig {
    fn from(args: LlmArgs) -> Self {
        Self {
            gemini_api_key: args.gemini_api_key,
            gemini_model: args.gemini_model,
            gemini_base_url: args.gemini_base_url,
            request_timeout: Duration::from_secs(args.llm_request_timeout_secs),
        }
    }
}

impl From<Args> for NutrimoodConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: args.llm.into(),
            action: args.action.into(),
        }
    }
}
