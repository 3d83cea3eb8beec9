use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    mood_impact::{entities::PersonalizedMoodImpact, value_objects::PersonalizedMoodImpactInput},
};

/// Personalization Unit
#[cfg_attr(test, mockall::automock)]
pub trait MoodImpactService: Send + Sync {
    fn calculate_personalized_mood_impact(
        &self,
        input: PersonalizedMoodImpactInput,
    ) -> impl Future<Output = Result<Option<PersonalizedMoodImpact>, CoreError>> + Send;
}
