use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    report::{
        entities::{DailyMood, UserProfile, WeeklyLog},
        value_objects::WeeklyReport,
    },
};

/// Source of the week's logs and the user profile.
#[cfg_attr(test, mockall::automock)]
pub trait ReportRepository: Send + Sync {
    fn get_weekly_logs(&self) -> impl Future<Output = Result<Vec<WeeklyLog>, CoreError>> + Send;

    fn get_weekly_mood(&self) -> impl Future<Output = Result<Vec<DailyMood>, CoreError>> + Send;

    fn get_profile(&self) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ReportService: Send + Sync {
    fn get_weekly_report(&self) -> impl Future<Output = Result<WeeklyReport, CoreError>> + Send;

    fn get_weekly_mood(&self) -> impl Future<Output = Result<Vec<DailyMood>, CoreError>> + Send;

    fn get_profile(&self) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}
