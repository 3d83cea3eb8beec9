use crate::{
    domain::common::{NutrimoodConfig, services::Service},
    infrastructure::{llm::GeminiLLMClient, report::StaticReportRepository},
};

pub type NutrimoodService = Service<GeminiLLMClient, StaticReportRepository>;

pub async fn create_service(config: NutrimoodConfig) -> Result<NutrimoodService, anyhow::Error> {
    let llm_client = GeminiLLMClient::new(&config.llm)?;
    let report_repository = StaticReportRepository::new();

    tracing::info!(
        model = %llm_client.model_name(),
        "LLM client initialized"
    );

    Ok(Service::new(llm_client, report_repository, config.action))
}
