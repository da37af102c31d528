use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::conflict_detector::ScheduleSync;
use super::schedule_model::{NewClassBlock, NewSleepLog, NewStudySession, Schedule};
use super::schedule_traits::{ScheduleRepositoryTrait, ScheduleServiceTrait};
use crate::errors::Result;

pub struct ScheduleService {
    repository: Arc<dyn ScheduleRepositoryTrait>,
}

impl ScheduleService {
    pub fn new(repository: Arc<dyn ScheduleRepositoryTrait>) -> Self {
        ScheduleService { repository }
    }
}

#[async_trait]
impl ScheduleServiceTrait for ScheduleService {
    async fn get_schedule(&self, user_id: &str) -> Result<Schedule> {
        self.repository.get_or_create_schedule(user_id).await
    }

    async fn add_class(&self, user_id: &str, new_class: NewClassBlock) -> Result<Schedule> {
        new_class.validate()?;
        let class = new_class.into_class_block();
        debug!(
            "Adding class '{}' on {} at {} for user {}",
            class.subject, class.day, class.start_time, user_id
        );
        self.repository
            .modify_schedule(
                user_id,
                Box::new(move |schedule| {
                    schedule.classes.push(class);
                    Ok(())
                }),
            )
            .await
    }

    async fn add_study_session(
        &self,
        user_id: &str,
        new_session: NewStudySession,
    ) -> Result<Schedule> {
        new_session.validate()?;
        let session = new_session.into_study_session()?;
        self.repository
            .modify_schedule(
                user_id,
                Box::new(move |schedule| {
                    schedule.study_sessions.push(session);
                    Ok(())
                }),
            )
            .await
    }

    async fn add_sleep_log(&self, user_id: &str, new_log: NewSleepLog) -> Result<Schedule> {
        new_log.validate()?;
        let log = new_log.into_sleep_log()?;
        self.repository
            .modify_schedule(
                user_id,
                Box::new(move |schedule| {
                    schedule.sleep_logs.push(log);
                    Ok(())
                }),
            )
            .await
    }

    fn sync_schedule(&self, user_id: &str) -> Result<ScheduleSync> {
        let schedule = self.repository.load_schedule(user_id)?;
        let sync = ScheduleSync::for_schedule(schedule.as_ref());
        if !sync.conflicts.is_empty() {
            debug!(
                "Found {} class conflict(s) for user {}",
                sync.conflicts.len(),
                user_id
            );
        }
        Ok(sync)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{Weekday, RECOMMENDED_BLOCKS};
    use crate::store::DocumentMutation;
    use crate::Error;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryScheduleRepository {
        schedules: Mutex<HashMap<String, Schedule>>,
    }

    #[async_trait]
    impl ScheduleRepositoryTrait for InMemoryScheduleRepository {
        fn load_schedule(&self, user_id: &str) -> Result<Option<Schedule>> {
            Ok(self.schedules.lock().unwrap().get(user_id).cloned())
        }

        async fn get_or_create_schedule(&self, user_id: &str) -> Result<Schedule> {
            let mut schedules = self.schedules.lock().unwrap();
            Ok(schedules
                .entry(user_id.to_string())
                .or_insert_with(|| Schedule::empty(user_id))
                .clone())
        }

        async fn modify_schedule(
            &self,
            user_id: &str,
            mutation: DocumentMutation<Schedule>,
        ) -> Result<Schedule> {
            let mut schedules = self.schedules.lock().unwrap();
            let mut schedule = schedules
                .get(user_id)
                .cloned()
                .unwrap_or_else(|| Schedule::empty(user_id));
            mutation(&mut schedule)?;
            schedules.insert(user_id.to_string(), schedule.clone());
            Ok(schedule)
        }
    }

    fn service() -> ScheduleService {
        ScheduleService::new(Arc::new(InMemoryScheduleRepository::default()))
    }

    fn new_class(day: Weekday, start: &str, subject: &str) -> NewClassBlock {
        NewClassBlock {
            day,
            start_time: start.parse().unwrap(),
            end_time: "23:00".parse().unwrap(),
            subject: subject.to_string(),
        }
    }

    #[tokio::test]
    async fn sync_without_schedule_returns_defaults() {
        let service = service();
        let sync = service.sync_schedule("nobody").unwrap();
        assert!(sync.conflicts.is_empty());
        assert_eq!(sync.recommendations, RECOMMENDED_BLOCKS);
    }

    #[tokio::test]
    async fn added_classes_are_checked_for_conflicts() {
        let service = service();
        service
            .add_class("u1", new_class(Weekday::Monday, "09:00", "Math"))
            .await
            .unwrap();
        service
            .add_class("u1", new_class(Weekday::Monday, "09:00", "Physics"))
            .await
            .unwrap();
        // Another user's classes never collide with u1's.
        service
            .add_class("u2", new_class(Weekday::Monday, "09:00", "Art"))
            .await
            .unwrap();

        let sync = service.sync_schedule("u1").unwrap();
        assert_eq!(sync.conflicts.len(), 1);
        assert!(sync.conflicts[0].message.contains("Monday at 09:00"));
        assert!(service.sync_schedule("u2").unwrap().conflicts.is_empty());
    }

    #[tokio::test]
    async fn blank_subject_is_rejected() {
        let service = service();
        let err = service
            .add_class("u1", new_class(Weekday::Friday, "08:00", "   "))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(service.sync_schedule("u1").unwrap().conflicts.is_empty());
    }

    #[tokio::test]
    async fn sleep_quality_outside_range_is_rejected() {
        let service = service();
        let log = NewSleepLog {
            date: "2025-01-10".to_string(),
            bedtime: "23:00".parse().unwrap(),
            wake_time: "07:00".parse().unwrap(),
            quality: 6,
        };
        assert!(service.add_sleep_log("u1", log).await.is_err());

        let ok = NewSleepLog {
            date: "2025-01-10".to_string(),
            bedtime: "23:00".parse().unwrap(),
            wake_time: "07:00".parse().unwrap(),
            quality: 4,
        };
        let schedule = service.add_sleep_log("u1", ok).await.unwrap();
        assert_eq!(schedule.sleep_logs.len(), 1);
        assert_eq!(schedule.sleep_logs[0].quality, 4);
    }

    #[tokio::test]
    async fn end_before_start_is_accepted_as_is() {
        let service = service();
        let session = NewStudySession {
            date: "2025-01-10T00:00:00Z".to_string(),
            start_time: "22:00".parse().unwrap(),
            end_time: "01:00".parse().unwrap(),
            subject: "Exam prep".to_string(),
        };
        let schedule = service.add_study_session("u1", session).await.unwrap();
        assert_eq!(schedule.study_sessions[0].end_time.to_string(), "01:00");
    }
}
