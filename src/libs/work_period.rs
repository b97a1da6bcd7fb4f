//! Work period data model consumed by the report outputs.
//!
//! A [`WorkPeriod`] is the reporting window: a begin and end date plus the
//! chronologically ordered [`Day`]s that fall inside it. Each day holds the
//! tracked [`Entry`] intervals, and each entry is booked on a [`Project`] and
//! may be flagged as a break.
//!
//! ## Serialized Form
//!
//! Periods are exchanged as JSON. Dates use `YYYY-MM-DD`, times accept both
//! `HH:MM` and `HH:MM:SS`, and `is_break` may be omitted for work entries:
//!
//! ```json
//! {
//!   "begin": "2013-09-09",
//!   "end": "2013-09-09",
//!   "days": [
//!     {
//!       "date": "2013-09-09",
//!       "entries": [
//!         { "begin": "09:00", "end": "10:00", "project": "Lunch", "is_break": true },
//!         { "begin": "10:00", "end": "10:30", "project": "Project1" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! ## Validation
//!
//! The outputs never validate what they render. Invariants are checked once,
//! when a period is loaded, by [`WorkPeriod::validate`].

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors raised when a work period violates the data model invariants.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("period begins on {begin} but ends on {end}")]
    InvertedPeriod { begin: NaiveDate, end: NaiveDate },

    #[error("day {date} lies outside the period {begin} - {end}")]
    DayOutsidePeriod { date: NaiveDate, begin: NaiveDate, end: NaiveDate },

    #[error("day {date} is not in chronological order (follows {previous})")]
    DaysOutOfOrder { date: NaiveDate, previous: NaiveDate },

    #[error("entry {begin} - {end} ({project}) on {date} ends before it begins")]
    NegativeEntry {
        date: NaiveDate,
        begin: NaiveTime,
        end: NaiveTime,
        project: String,
    },

    #[error("failed to read work period: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse work period: {0}")]
    Json(#[from] serde_json::Error),
}

/// A named category that entries are booked on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Project {
    pub name: String,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One tracked interval within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(with = "time_of_day")]
    pub begin: NaiveTime,
    #[serde(with = "time_of_day")]
    pub end: NaiveTime,
    pub project: Project,
    #[serde(default)]
    pub is_break: bool,
}

impl Entry {
    pub fn new(begin: NaiveTime, end: NaiveTime, project: Project, is_break: bool) -> Self {
        Self { begin, end, project, is_break }
    }

    pub fn work(begin: NaiveTime, end: NaiveTime, project: &str) -> Self {
        Self::new(begin, end, Project::new(project), false)
    }

    pub fn pause(begin: NaiveTime, end: NaiveTime, project: &str) -> Self {
        Self::new(begin, end, Project::new(project), true)
    }

    /// Length of the entry. Not clamped; the loader rejects negative entries.
    pub fn duration(&self) -> Duration {
        self.end - self.begin
    }
}

/// One calendar day of tracked entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Day {
    pub fn new(date: NaiveDate, entries: Vec<Entry>) -> Self {
        Self { date, entries }
    }

    /// Sum of all non-break entry durations.
    pub fn work_duration(&self) -> Duration {
        self.entries
            .iter()
            .filter(|entry| !entry.is_break)
            .fold(Duration::zero(), |acc, entry| acc + entry.duration())
    }

    pub fn break_duration(&self) -> Duration {
        self.entries
            .iter()
            .filter(|entry| entry.is_break)
            .fold(Duration::zero(), |acc, entry| acc + entry.duration())
    }
}

/// The reporting window handed to an output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkPeriod {
    pub begin: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub days: Vec<Day>,
}

impl WorkPeriod {
    pub fn new(begin: NaiveDate, end: NaiveDate, days: Vec<Day>) -> Self {
        Self { begin, end, days }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn work_duration(&self) -> Duration {
        self.days.iter().fold(Duration::zero(), |acc, day| acc + day.work_duration())
    }

    /// Checks the invariants the data model owns.
    ///
    /// - `begin <= end`
    /// - every day lies in `[begin, end]` and days are strictly chronological
    /// - no entry ends before it begins
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.begin > self.end {
            return Err(ModelError::InvertedPeriod {
                begin: self.begin,
                end: self.end,
            });
        }

        let mut previous: Option<NaiveDate> = None;
        for day in &self.days {
            if day.date < self.begin || day.date > self.end {
                return Err(ModelError::DayOutsidePeriod {
                    date: day.date,
                    begin: self.begin,
                    end: self.end,
                });
            }
            if let Some(previous) = previous {
                if day.date <= previous {
                    return Err(ModelError::DaysOutOfOrder { date: day.date, previous });
                }
            }
            previous = Some(day.date);

            if let Some(entry) = day.entries.iter().find(|entry| entry.end < entry.begin) {
                return Err(ModelError::NegativeEntry {
                    date: day.date,
                    begin: entry.begin,
                    end: entry.end,
                    project: entry.project.name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Parses and validates a serialized work period.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let work_period: WorkPeriod = serde_json::from_str(json)?;
        work_period.validate()?;
        tracing::debug!(
            begin = %work_period.begin,
            end = %work_period.end,
            days = work_period.days.len(),
            "loaded work period"
        );
        Ok(work_period)
    }

    /// Reads, parses and validates a serialized work period from `reader`.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, ModelError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    /// Loads a work period from `path`, or from stdin when `path` is `-`.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if path == Path::new("-") {
            return Self::from_reader(std::io::stdin().lock());
        }
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}

/// Serde adapter for times of day written as `HH:MM` or `HH:MM:SS`.
mod time_of_day {
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const SHORT_FORMAT: &str = "%H:%M";
    const LONG_FORMAT: &str = "%H:%M:%S";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(SHORT_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, SHORT_FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, LONG_FORMAT))
            .map_err(|e| D::Error::custom(format!("invalid time '{}': {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_day_durations_split_breaks() {
        let day = Day::new(
            NaiveDate::from_ymd_opt(2013, 9, 9).unwrap(),
            vec![Entry::pause(t(9, 0), t(10, 0), "Lunch"), Entry::work(t(10, 0), t(10, 30), "Project1")],
        );
        assert_eq!(day.work_duration(), Duration::minutes(30));
        assert_eq!(day.break_duration(), Duration::minutes(60));
    }

    #[test]
    fn test_time_of_day_accepts_seconds() {
        let entry: Entry = serde_json::from_str(r#"{"begin":"09:00:00","end":"09:15","project":"P"}"#).unwrap();
        assert_eq!(entry.duration(), Duration::minutes(15));
        assert!(!entry.is_break);
    }
}
