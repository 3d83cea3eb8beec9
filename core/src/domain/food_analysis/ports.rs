use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{entities::FoodAnalysis, value_objects::AnalyzeFoodImageInput},
};

/// Image Analysis Unit
#[cfg_attr(test, mockall::automock)]
pub trait FoodAnalysisService: Send + Sync {
    /// `Ok(None)` means the model returned no structured output.
    fn analyze_food_image(
        &self,
        input: AnalyzeFoodImageInput,
    ) -> impl Future<Output = Result<Option<FoodAnalysis>, CoreError>> + Send;
}
