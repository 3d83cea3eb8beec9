pub mod get_weekly_mood;
pub mod get_weekly_report;
