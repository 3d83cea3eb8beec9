use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::{
        entities::FoodAnalysis,
        ports::FoodAnalysisService,
        schema::get_food_image_analysis_schema,
        value_objects::{AnalyzeFoodImageInput, ImageDataUri},
    },
    llm::{helpers::decode_structured_output, ports::LLMClient},
    prompt::templates::FOOD_IMAGE_ANALYSIS_PROMPT,
    report::ports::ReportRepository,
};

impl<LLM, RR> FoodAnalysisService for Service<LLM, RR>
where
    LLM: LLMClient,
    RR: ReportRepository,
{
    #[instrument(skip(self, input))]
    async fn analyze_food_image(
        &self,
        input: AnalyzeFoodImageInput,
    ) -> Result<Option<FoodAnalysis>, CoreError> {
        // 1. Validate input shape
        let data_uri: ImageDataUri = input.photo_data_uri.parse()?;

        // 2. Build prompt
        let prompt =
            FOOD_IMAGE_ANALYSIS_PROMPT.render(&[("mime_type", data_uri.mime_type().as_str())])?;

        tracing::debug!(
            prompt = FOOD_IMAGE_ANALYSIS_PROMPT.name,
            version = FOOD_IMAGE_ANALYSIS_PROMPT.version,
            mime_type = %data_uri.mime_type(),
            "Submitting food image for analysis"
        );

        // 3. Call LLM
        let raw_response = self
            .llm_client
            .generate_with_image(
                prompt,
                data_uri.into_inline_image(),
                get_food_image_analysis_schema(),
            )
            .await?;

        // 4. Validate response shape
        let analysis = decode_structured_output::<FoodAnalysis>(raw_response)?;

        if let Some(analysis) = &analysis {
            tracing::info!(
                food_items = analysis.food_items.len(),
                "Food image analyzed"
            );
        }

        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::always;

    use super::*;
    use crate::domain::{
        common::ActionConfig, llm::ports::MockLLMClient, report::ports::MockReportRepository,
    };

    const PHOTO: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";

    fn service(llm: MockLLMClient) -> Service<MockLLMClient, MockReportRepository> {
        Service::new(llm, MockReportRepository::new(), ActionConfig::without_delay())
    }

    fn input(photo: &str) -> AnalyzeFoodImageInput {
        AnalyzeFoodImageInput {
            photo_data_uri: photo.to_string(),
        }
    }

    #[tokio::test]
    async fn test_returns_identified_food_items() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .withf(|prompt, image, schema| {
                prompt.contains("identify the food items")
                    && image.mime_type == "image/jpeg"
                    && image.data == "/9j/4AAQSkZJRg=="
                    && schema["required"][0] == "foodItems"
            })
            .times(1)
            .returning(|_, _, _| {
                Box::pin(async {
                    Ok(Some(
                        r#"{"foodItems":["Salmon","Rice"],"calories":620,"protein":38,"moodImpact":"Omega-3s may support a calmer mood."}"#
                            .to_string(),
                    ))
                })
            });

        let analysis = service(llm)
            .analyze_food_image(input(PHOTO))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(analysis.food_items, vec!["Salmon", "Rice"]);
        assert_eq!(analysis.calories, Some(620.0));
        assert_eq!(analysis.protein, Some(38.0));
        assert_eq!(analysis.carbs, None);
        assert!(analysis.mood_impact.is_some());
    }

    #[tokio::test]
    async fn test_invalid_data_uri_never_reaches_llm() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().never();

        let err = service(llm)
            .analyze_food_image(input("not-a-data-uri"))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidDataUri(_)));
    }

    #[tokio::test]
    async fn test_empty_llm_answer_is_no_result() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .with(always(), always(), always())
            .returning(|_, _, _| Box::pin(async { Ok(None) }));

        let analysis = service(llm).analyze_food_image(input(PHOTO)).await.unwrap();
        assert_eq!(analysis, None);
    }

    #[tokio::test]
    async fn test_numbers_as_strings_fail_schema_validation() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().returning(|_, _, _| {
            Box::pin(async { Ok(Some(r#"{"foodItems":["Toast"],"calories":"200"}"#.to_string())) })
        });

        let err = service(llm)
            .analyze_food_image(input(PHOTO))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::SchemaValidation(_)));
    }

    #[tokio::test]
    async fn test_upstream_error_propagates() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().returning(|_, _, _| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError(
                    "LLM API returned error: 503".to_string(),
                ))
            })
        });

        let err = service(llm)
            .analyze_food_image(input(PHOTO))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}
