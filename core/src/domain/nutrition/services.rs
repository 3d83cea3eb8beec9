use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    llm::{helpers::decode_structured_output, ports::LLMClient},
    nutrition::{
        entities::NutritionalAnalysis, ports::NutritionService,
        schema::get_nutritional_analysis_schema, value_objects::NutritionalAnalysisInput,
    },
    prompt::templates::NUTRITIONAL_ANALYSIS_PROMPT,
    report::ports::ReportRepository,
};

impl<LLM, RR> NutritionService for Service<LLM, RR>
where
    LLM: LLMClient,
    RR: ReportRepository,
{
    #[instrument(skip(self, input), fields(food_name = %input.food_name))]
    async fn analyze_nutrition(
        &self,
        input: NutritionalAnalysisInput,
    ) -> Result<Option<NutritionalAnalysis>, CoreError> {
        let food_name = input.food_name.trim();
        if food_name.is_empty() {
            return Err(CoreError::Invalid("food name is empty".to_string()));
        }

        let prompt = NUTRITIONAL_ANALYSIS_PROMPT.render(&[("food_name", food_name)])?;

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_nutritional_analysis_schema())
            .await?;

        decode_structured_output::<NutritionalAnalysis>(raw_response)
    }
}
