//! Schedule repository and service traits.

use async_trait::async_trait;

use super::conflict_detector::ScheduleSync;
use super::schedule_model::{NewClassBlock, NewSleepLog, NewStudySession, Schedule};
use crate::errors::Result;
use crate::store::DocumentMutation;

/// Persistence contract for per-user schedules.
///
/// Every write runs atomically: the schedule is created on demand and the
/// mutation is applied and saved in one transaction.
#[async_trait]
pub trait ScheduleRepositoryTrait: Send + Sync {
    /// Loads the user's schedule without creating it.
    fn load_schedule(&self, user_id: &str) -> Result<Option<Schedule>>;

    /// Returns the user's schedule, creating an empty one if none exists.
    async fn get_or_create_schedule(&self, user_id: &str) -> Result<Schedule>;

    /// Applies `mutation` to the user's schedule (created on demand) and saves it.
    async fn modify_schedule(
        &self,
        user_id: &str,
        mutation: DocumentMutation<Schedule>,
    ) -> Result<Schedule>;
}

#[async_trait]
pub trait ScheduleServiceTrait: Send + Sync {
    async fn get_schedule(&self, user_id: &str) -> Result<Schedule>;
    async fn add_class(&self, user_id: &str, new_class: NewClassBlock) -> Result<Schedule>;
    async fn add_study_session(
        &self,
        user_id: &str,
        new_session: NewStudySession,
    ) -> Result<Schedule>;
    async fn add_sleep_log(&self, user_id: &str, new_log: NewSleepLog) -> Result<Schedule>;

    /// Checks the user's classes for conflicts and returns the recommended blocks.
    fn sync_schedule(&self, user_id: &str) -> Result<ScheduleSync>;
}
