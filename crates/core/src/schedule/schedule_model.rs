//! Schedule domain models.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MAX_SLEEP_QUALITY, MIN_SLEEP_QUALITY};
use crate::errors::{Error, Result};
use crate::utils::{parse_iso_datetime, require_text, ClockTime};

/// Day of the week a class recurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recurring weekly time slot for a class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassBlock {
    pub id: String,
    pub day: Weekday,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub subject: String,
}

/// Input model for adding a class to a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClassBlock {
    pub day: Weekday,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub subject: String,
}

impl NewClassBlock {
    pub fn validate(&self) -> Result<()> {
        require_text(&self.subject, "subject")
    }

    pub fn into_class_block(self) -> ClassBlock {
        ClassBlock {
            id: Uuid::new_v4().to_string(),
            day: self.day,
            start_time: self.start_time,
            end_time: self.end_time,
            subject: self.subject.trim().to_string(),
        }
    }
}

/// A dated, one-off study session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: String,
    pub date: DateTime<Utc>,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub subject: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudySession {
    pub date: String,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub subject: String,
}

impl NewStudySession {
    pub fn validate(&self) -> Result<()> {
        parse_iso_datetime(&self.date, "date")?;
        require_text(&self.subject, "subject")
    }

    pub fn into_study_session(self) -> Result<StudySession> {
        Ok(StudySession {
            id: Uuid::new_v4().to_string(),
            date: parse_iso_datetime(&self.date, "date")?,
            start_time: self.start_time,
            end_time: self.end_time,
            subject: self.subject.trim().to_string(),
        })
    }
}

/// A night of sleep with a 1..=5 quality rating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SleepLog {
    pub id: String,
    pub date: DateTime<Utc>,
    pub bedtime: ClockTime,
    pub wake_time: ClockTime,
    pub quality: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSleepLog {
    pub date: String,
    pub bedtime: ClockTime,
    pub wake_time: ClockTime,
    pub quality: i64,
}

impl NewSleepLog {
    pub fn validate(&self) -> Result<()> {
        parse_iso_datetime(&self.date, "date")?;
        let range = i64::from(MIN_SLEEP_QUALITY)..=i64::from(MAX_SLEEP_QUALITY);
        if !range.contains(&self.quality) {
            return Err(Error::invalid_input(format!(
                "Quality must be between {MIN_SLEEP_QUALITY} and {MAX_SLEEP_QUALITY}"
            )));
        }
        Ok(())
    }

    pub fn into_sleep_log(self) -> Result<SleepLog> {
        let quality = u8::try_from(self.quality)
            .map_err(|_| Error::invalid_input("Quality must be between 1 and 5"))?;
        Ok(SleepLog {
            id: Uuid::new_v4().to_string(),
            date: parse_iso_datetime(&self.date, "date")?,
            bedtime: self.bedtime,
            wake_time: self.wake_time,
            quality,
        })
    }
}

/// Per-user schedule aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub user_id: String,
    pub classes: Vec<ClassBlock>,
    pub study_sessions: Vec<StudySession>,
    pub sleep_logs: Vec<SleepLog>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Schedule {
    /// The empty schedule a user starts with.
    pub fn empty(user_id: &str) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            user_id: user_id.to_string(),
            classes: Vec::new(),
            study_sessions: Vec::new(),
            sleep_logs: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
