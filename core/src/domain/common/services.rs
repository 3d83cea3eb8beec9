use crate::domain::{
    common::ActionConfig, llm::ports::LLMClient, report::ports::ReportRepository,
};

/// Entry point for every domain service. Each domain module implements its
/// service trait on this struct.
#[derive(Clone, Debug)]
pub struct Service<LLM, RR>
where
    LLM: LLMClient,
    RR: ReportRepository,
{
    pub(crate) llm_client: LLM,
    pub(crate) report_repository: RR,
    pub(crate) action_config: ActionConfig,
}

impl<LLM, RR> Service<LLM, RR>
where
    LLM: LLMClient,
    RR: ReportRepository,
{
    pub fn new(llm_client: LLM, report_repository: RR, action_config: ActionConfig) -> Self {
        Self {
            llm_client,
            report_repository,
            action_config,
        }
    }

    pub fn action_config(&self) -> &ActionConfig {
        &self.action_config
    }
}
