//! Schedule module - class blocks, study sessions, sleep logs and conflict detection.

mod conflict_detector;
mod schedule_model;
mod schedule_service;
mod schedule_traits;

pub use conflict_detector::{
    detect_conflicts, ConflictKind, ConflictReport, RecommendedBlocks, ScheduleSync,
    RECOMMENDED_BLOCKS,
};
pub use schedule_model::{
    ClassBlock, NewClassBlock, NewSleepLog, NewStudySession, Schedule, SleepLog, StudySession,
    Weekday,
};
pub use schedule_service::ScheduleService;
pub use schedule_traits::{ScheduleRepositoryTrait, ScheduleServiceTrait};
