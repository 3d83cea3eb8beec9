use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    llm::{helpers::decode_structured_output, ports::LLMClient},
    mood_impact::{
        entities::PersonalizedMoodImpact, ports::MoodImpactService,
        schema::get_personalized_mood_impact_schema, value_objects::PersonalizedMoodImpactInput,
    },
    prompt::templates::PERSONALIZED_MOOD_IMPACT_PROMPT,
    report::ports::ReportRepository,
};

impl<LLM, RR> MoodImpactService for Service<LLM, RR>
where
    LLM: LLMClient,
    RR: ReportRepository,
{
    #[instrument(skip(self, input), fields(mood_score = input.mood_score))]
    async fn calculate_personalized_mood_impact(
        &self,
        input: PersonalizedMoodImpactInput,
    ) -> Result<Option<PersonalizedMoodImpact>, CoreError> {
        let mood_score = input.mood_score.to_string();
        let prompt = PERSONALIZED_MOOD_IMPACT_PROMPT.render(&[
            ("food_description", input.food_description.as_str()),
            ("mood_score", mood_score.as_str()),
            ("nutrition_data", input.nutrition_data.as_str()),
        ])?;

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_personalized_mood_impact_schema())
            .await?;

        decode_structured_output::<PersonalizedMoodImpact>(raw_response)
    }
}
