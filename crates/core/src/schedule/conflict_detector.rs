//! Weekly time-conflict detection over recurring class blocks.
//!
//! Two classes conflict only when they share both the day and the exact
//! start time text, so `9:00` and `09:00` are different slots. Partially
//! overlapping intervals with different start times are not reported.

use std::collections::HashMap;

use serde::Serialize;

use super::schedule_model::{ClassBlock, Schedule, Weekday};
use crate::utils::ClockTime;

/// What kind of records collided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    Class,
}

/// A collision between the class already occupying a slot and a later one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictReport {
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    pub day: Weekday,
    pub start_time: ClockTime,
    pub scheduled_subject: String,
    pub conflicting_subject: String,
    pub message: String,
}

impl ConflictReport {
    fn between(occupant: &ClassBlock, newcomer: &ClassBlock) -> Self {
        let message = format!(
            "Conflict on {} at {}: {} and {}",
            newcomer.day, newcomer.start_time, occupant.subject, newcomer.subject
        );
        Self {
            kind: ConflictKind::Class,
            day: newcomer.day,
            start_time: newcomer.start_time.clone(),
            scheduled_subject: occupant.subject.clone(),
            conflicting_subject: newcomer.subject.clone(),
            message,
        }
    }
}

/// Standard daily blocks suggested alongside every conflict check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendedBlocks {
    pub sleep: &'static str,
    pub study: &'static str,
    pub meal: &'static str,
    pub exercise: &'static str,
}

/// Static policy table; independent of the user's data.
pub const RECOMMENDED_BLOCKS: RecommendedBlocks = RecommendedBlocks {
    sleep: "22:00-06:00",
    study: "08:00-12:00",
    meal: "12:00-13:00",
    exercise: "17:00-18:00",
};

/// Result of a schedule sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSync {
    pub conflicts: Vec<ConflictReport>,
    pub recommendations: RecommendedBlocks,
}

impl ScheduleSync {
    /// Runs conflict detection for a user's schedule, if they have one.
    pub fn for_schedule(schedule: Option<&Schedule>) -> Self {
        let conflicts = schedule
            .map(|s| detect_conflicts(&s.classes))
            .unwrap_or_default();
        Self {
            conflicts,
            recommendations: RECOMMENDED_BLOCKS,
        }
    }
}

/// Reports every class whose `(day, start_time)` slot is already taken by an
/// earlier class in `classes`.
///
/// One report is emitted per colliding block beyond the first, in input
/// order; the first block seen for a slot is always the reported occupant.
pub fn detect_conflicts(classes: &[ClassBlock]) -> Vec<ConflictReport> {
    let mut occupied: HashMap<(Weekday, &ClockTime), &ClassBlock> = HashMap::new();
    let mut conflicts = Vec::new();

    for class in classes {
        match occupied.get(&(class.day, &class.start_time)) {
            Some(occupant) => conflicts.push(ConflictReport::between(occupant, class)),
            None => {
                occupied.insert((class.day, &class.start_time), class);
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(day: Weekday, start: &str, end: &str, subject: &str) -> ClassBlock {
        ClassBlock {
            id: format!("{subject}-{start}"),
            day,
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            subject: subject.to_string(),
        }
    }

    #[test]
    fn distinct_slots_have_no_conflicts() {
        let classes = vec![
            class(Weekday::Monday, "09:00", "10:30", "Math"),
            class(Weekday::Monday, "11:00", "12:00", "Physics"),
            class(Weekday::Tuesday, "09:00", "10:30", "Chemistry"),
            class(Weekday::Friday, "13:00", "14:00", "History"),
        ];
        assert!(detect_conflicts(&classes).is_empty());
    }

    #[test]
    fn same_day_and_start_is_reported_once() {
        let classes = vec![
            class(Weekday::Monday, "09:00", "10:00", "Math"),
            class(Weekday::Monday, "09:00", "11:00", "Physics"),
        ];

        let conflicts = detect_conflicts(&classes);

        assert_eq!(conflicts.len(), 1);
        let report = &conflicts[0];
        assert_eq!(report.kind, ConflictKind::Class);
        assert_eq!(report.scheduled_subject, "Math");
        assert_eq!(report.conflicting_subject, "Physics");
        assert_eq!(report.message, "Conflict on Monday at 09:00: Math and Physics");
    }

    #[test]
    fn each_extra_block_in_a_slot_gets_its_own_report() {
        let classes = vec![
            class(Weekday::Tuesday, "10:00", "11:00", "Art"),
            class(Weekday::Tuesday, "10:00", "12:00", "Music"),
            class(Weekday::Tuesday, "10:00", "10:45", "Drama"),
        ];

        let conflicts = detect_conflicts(&classes);

        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].scheduled_subject, "Art");
        assert_eq!(conflicts[0].conflicting_subject, "Music");
        assert_eq!(conflicts[1].scheduled_subject, "Art");
        assert_eq!(conflicts[1].conflicting_subject, "Drama");
    }

    #[test]
    fn overlapping_intervals_with_different_starts_are_not_flagged() {
        let classes = vec![
            class(Weekday::Wednesday, "09:00", "10:30", "Biology"),
            class(Weekday::Wednesday, "09:15", "10:00", "Statistics"),
        ];
        assert!(detect_conflicts(&classes).is_empty());
    }

    #[test]
    fn start_times_compare_as_written() {
        let classes = vec![
            class(Weekday::Thursday, "9:00", "10:00", "Logic"),
            class(Weekday::Thursday, "09:00", "10:00", "Ethics"),
        ];
        assert!(detect_conflicts(&classes).is_empty());

        let classes = vec![
            class(Weekday::Thursday, "9:00", "10:00", "Logic"),
            class(Weekday::Thursday, "9:00", "11:00", "Rhetoric"),
        ];
        let conflicts = detect_conflicts(&classes);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].message, "Conflict on Thursday at 9:00: Logic and Rhetoric");
    }

    #[test]
    fn recommendations_do_not_depend_on_input() {
        let expected = RecommendedBlocks {
            sleep: "22:00-06:00",
            study: "08:00-12:00",
            meal: "12:00-13:00",
            exercise: "17:00-18:00",
        };

        let without_schedule = ScheduleSync::for_schedule(None);
        assert!(without_schedule.conflicts.is_empty());
        assert_eq!(without_schedule.recommendations, expected);

        let mut schedule = Schedule::empty("user-1");
        schedule.classes = vec![
            class(Weekday::Monday, "09:00", "10:00", "Math"),
            class(Weekday::Monday, "09:00", "10:00", "Physics"),
        ];
        let with_conflicts = ScheduleSync::for_schedule(Some(&schedule));
        assert_eq!(with_conflicts.conflicts.len(), 1);
        assert_eq!(with_conflicts.recommendations, expected);
    }

    #[test]
    fn sync_serializes_with_type_tag() {
        let classes = vec![
            class(Weekday::Monday, "09:00", "10:00", "Math"),
            class(Weekday::Monday, "09:00", "10:00", "Physics"),
        ];
        let json = serde_json::to_value(detect_conflicts(&classes)).unwrap();
        assert_eq!(json[0]["type"], "class");
        assert_eq!(json[0]["day"], "Monday");
        assert_eq!(json[0]["startTime"], "09:00");
    }
}
