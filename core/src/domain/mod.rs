pub mod action;
pub mod common;
pub mod dashboard;
pub mod food_analysis;
pub mod llm;
pub mod mood_impact;
pub mod nutrition;
pub mod prompt;
pub mod report;
