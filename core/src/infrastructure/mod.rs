pub mod llm;
pub mod report;
