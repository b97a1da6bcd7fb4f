//! Date, time and duration formatting for report output.
//!
//! Every output renders calendar values through this module so that reports
//! stay byte-for-byte consistent between runs and between outputs.
//!
//! ## Format Specifications
//!
//! ### Dates
//! Calendar dates use ISO 8601: `YYYY-MM-DD`.
//!
//! ### Times of Day
//! Entry boundaries use the 24-hour clock, zero-padded: `HH:MM`.
//!
//! ### Durations
//! Durations follow the `H+:MM` pattern:
//! - Hours are not padded and not wrapped at 24, so a month of work reads `167:00`
//! - Minutes are always two digits
//! - Seconds are truncated
//! - Negative durations keep their sign (`-0:30`); nothing is clamped
//!
//! ### Examples
//! - 0 minutes → `"0:00"`
//! - 75 minutes → `"1:15"`
//! - 1500 minutes → `"25:00"`
//!
//! ```rust
//! use stunden::libs::formatter::format_duration;
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&Duration::minutes(495)), "8:15");
//! ```

use chrono::{Duration, NaiveDate, NaiveTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Formats a calendar date as `YYYY-MM-DD`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats a time of day as `HH:MM`.
pub fn format_time(time: &NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Formats a duration as `H+:MM`.
///
/// Hours are unbounded, so totals spanning several days are printed as is
/// (`25:00`, not `01:00`).
///
/// # Examples
///
/// ```rust
/// use stunden::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::zero()), "0:00");
/// assert_eq!(format_duration(&Duration::minutes(75)), "1:15");
/// assert_eq!(format_duration(&Duration::hours(167)), "167:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let total_minutes = duration.num_minutes();
    let sign = if total_minutes < 0 { "-" } else { "" };
    let minutes = total_minutes.abs();

    format!("{}{}:{:02}", sign, minutes / 60, minutes % 60)
}

/// Average work time per day in whole minutes.
///
/// Uses truncating integer division on total minutes, matching how the
/// footer of a report is computed. `days` must be non-zero; the text report
/// returns early for empty periods before calling this.
pub fn average_per_day(total: &Duration, days: usize) -> Duration {
    Duration::minutes(total.num_minutes() / days as i64)
}
