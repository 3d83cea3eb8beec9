use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, llm::value_objects::InlineImage};

/// LLM Client trait for calling AI models.
///
/// Both methods resolve to `Ok(None)` when the model answered without any
/// text to decode (no candidates, blocked prompt, empty part).
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: InlineImage,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}
