//! Stored form of a user's schedule.

use serde::{Deserialize, Serialize};

use crate::documents::{DocumentMeta, UserDocument};
use unilife_core::schedule::{ClassBlock, Schedule, SleepLog, StudySession};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDocument {
    #[serde(default)]
    pub classes: Vec<ClassBlock>,
    #[serde(default)]
    pub study_sessions: Vec<StudySession>,
    #[serde(default)]
    pub sleep_logs: Vec<SleepLog>,
}

impl UserDocument for ScheduleDocument {
    const KIND: &'static str = "schedule";

    type Aggregate = Schedule;

    fn into_aggregate(self, meta: DocumentMeta) -> Schedule {
        Schedule {
            user_id: meta.user_id,
            classes: self.classes,
            study_sessions: self.study_sessions,
            sleep_logs: self.sleep_logs,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    fn from_aggregate(schedule: Schedule) -> Self {
        Self {
            classes: schedule.classes,
            study_sessions: schedule.study_sessions,
            sleep_logs: schedule.sleep_logs,
        }
    }
}
