use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{entities::NutritionalAnalysis, value_objects::NutritionalAnalysisInput},
};

/// Nutrition Lookup Unit
#[cfg_attr(test, mockall::automock)]
pub trait NutritionService: Send + Sync {
    fn analyze_nutrition(
        &self,
        input: NutritionalAnalysisInput,
    ) -> impl Future<Output = Result<Option<NutritionalAnalysis>, CoreError>> + Send;
}
