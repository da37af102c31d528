use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

static CLOCK_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("clock time pattern is valid")
});

/// A wall-clock time of day in 24-hour `H:MM` or `HH:MM` notation.
///
/// The text is kept exactly as entered: `9:00` and `09:00` are both valid
/// but are different values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(String);

impl ClockTime {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ClockTime::try_from(s.to_string())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        if !CLOCK_TIME_PATTERN.is_match(&value) {
            return Err(Error::invalid_input(format!(
                "'{value}' is not a time in HH:MM format"
            )));
        }
        Ok(ClockTime(value))
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Half-open `[midnight, next_midnight)` window of the calendar day that
/// contains `reference`, evaluated in the reference's own time zone.
pub fn day_window<Tz: TimeZone>(reference: &DateTime<Tz>) -> (DateTime<Utc>, DateTime<Utc>) {
    let tz = reference.timezone();
    let day = reference.date_naive();
    let start = start_of_day(&tz, day);
    let end = match day.succ_opt() {
        Some(next) => start_of_day(&tz, next),
        None => DateTime::<Utc>::MAX_UTC,
    };
    (start, end)
}

/// First instant of `day` in `tz`.
fn start_of_day<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> DateTime<Utc> {
    let midnight = day.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        // Midnight skipped by a DST jump: the day starts one hour later.
        LocalResult::None => tz
            .from_local_datetime(&(midnight + Duration::hours(1)))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&midnight)),
    }
}

/// Parses an ISO-8601 date or date-time.
///
/// Offsets are honoured; a date-time without an offset and a bare date are
/// read as UTC.
pub fn parse_iso_datetime(value: &str, field: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
        .map_err(|_| Error::invalid_input(format!("{field} must be an ISO-8601 date")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn clock_time_keeps_text_as_entered() {
        let short: ClockTime = "9:05".parse().unwrap();
        let padded: ClockTime = "09:05".parse().unwrap();
        assert_ne!(short, padded);
        assert_eq!(short.to_string(), "9:05");
        assert_eq!(padded.as_str(), "09:05");
    }

    #[test]
    fn clock_time_rejects_out_of_range_values() {
        for bad in ["24:00", "12:60", "7", "ab:cd", "", "12:5", " 09:00"] {
            assert!(bad.parse::<ClockTime>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn clock_time_serializes_as_string() {
        let t: ClockTime = serde_json::from_str("\"7:30\"").unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"7:30\"");
        assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
    }

    #[test]
    fn day_window_follows_reference_zone() {
        let tz = FixedOffset::east_opt(7 * 3600).unwrap();
        let reference = tz.with_ymd_and_hms(2025, 3, 10, 1, 30, 0).unwrap();
        let (start, end) = day_window(&reference);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 3, 9, 17, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 3, 10, 17, 0, 0).unwrap());
    }

    #[test]
    fn parse_iso_datetime_accepts_dates_and_datetimes() {
        let date = parse_iso_datetime("2025-02-01", "date").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap());

        let with_offset = parse_iso_datetime("2025-02-01T10:00:00+02:00", "date").unwrap();
        assert_eq!(with_offset, Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap());

        assert!(parse_iso_datetime("next tuesday", "date").is_err());
    }
}
