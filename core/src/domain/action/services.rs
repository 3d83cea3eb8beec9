use tracing::instrument;

use crate::domain::{
    action::ports::{
        ActionService, IMAGE_ANALYSIS_NO_RESULT, NUTRITION_NO_RESULT, PERSONALIZATION_NO_RESULT,
    },
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    food_analysis::{
        entities::FoodAnalysis, ports::FoodAnalysisService, value_objects::AnalyzeFoodImageInput,
    },
    llm::ports::LLMClient,
    mood_impact::{
        entities::PersonalizedMoodImpact, ports::MoodImpactService,
        value_objects::PersonalizedMoodImpactInput,
    },
    nutrition::{
        entities::NutritionalAnalysis, ports::NutritionService,
        value_objects::NutritionalAnalysisInput,
    },
    report::ports::ReportRepository,
};

fn require_result<T>(result: Option<T>, message: &str) -> Result<T, CoreError> {
    result.ok_or_else(|| {
        tracing::warn!("{}", message);
        CoreError::NoResult(message.to_string())
    })
}

impl<LLM, RR> ActionService for Service<LLM, RR>
where
    LLM: LLMClient,
    RR: ReportRepository,
{
    #[instrument(skip(self, photo_data_uri), fields(action_id = %generate_uuid_v7()))]
    async fn analyze_food_image_action(
        &self,
        photo_data_uri: String,
    ) -> Result<FoodAnalysis, CoreError> {
        tokio::time::sleep(self.action_config.image_analysis_delay).await;

        let result = self
            .analyze_food_image(AnalyzeFoodImageInput { photo_data_uri })
            .await?;

        require_result(result, IMAGE_ANALYSIS_NO_RESULT)
    }

    #[instrument(skip(self), fields(action_id = %generate_uuid_v7()))]
    async fn analyze_nutrition_action(
        &self,
        food_name: String,
    ) -> Result<NutritionalAnalysis, CoreError> {
        tokio::time::sleep(self.action_config.nutrition_delay).await;

        let result = self
            .analyze_nutrition(NutritionalAnalysisInput { food_name })
            .await?;

        require_result(result, NUTRITION_NO_RESULT)
    }

    #[instrument(skip(self, input), fields(action_id = %generate_uuid_v7()))]
    async fn get_personalized_mood_impact_action(
        &self,
        input: PersonalizedMoodImpactInput,
    ) -> Result<PersonalizedMoodImpact, CoreError> {
        tokio::time::sleep(self.action_config.personalization_delay).await;

        let result = self.calculate_personalized_mood_impact(input).await?;

        require_result(result, PERSONALIZATION_NO_RESULT)
    }
}
