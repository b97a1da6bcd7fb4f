//! Plain text report of a work period.
//!
//! Produces the following layout:
//!
//! ```text
//! Start of period: 2013-09-02
//! End of period: 2013-09-30
//! ============================
//!
//! 2013-09-09
//! ==========
//! 09:00 - 10:00: Lunch (break) ==> 1:00
//! 10:00 - 10:30: Project1 ==> 0:30
//! 10:30 - 17:45: Project2 ==> 7:15
//! 17:45 - 18:15: Project3 ==> 0:30
//! Summary:
//!     Total work time: 8:15
//!
//! [...]
//!
//! TOTAL
//! =====
//! Work duration: 167:00
//! Days: 21
//! Work/day: 7:57
//! ```
//!
//! The summary line is indented with a tab. A period without days prints the
//! header followed by a single placeholder line and nothing else.

use super::OutputPlugin;
use crate::libs::{
    formatter::{average_per_day, format_date, format_duration, format_time},
    work_period::{Day, Entry, WorkPeriod},
};
use anyhow::Result;
use chrono::Duration;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Write;

pub const HEADER_RULE: &str = "============================";
pub const DAY_RULE: &str = "==========";
pub const TOTAL_RULE: &str = "=====";
pub const NO_ENTRIES: &str = "[Period contains no entries.]";

/// Text report output. Not configurable.
#[derive(Debug, Clone, Default)]
pub struct TextReport {
    project_summary: bool,
}

impl TextReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds per-project work totals under each day's `Summary:` block.
    pub fn with_project_summary(mut self, enabled: bool) -> Self {
        self.project_summary = enabled;
        self
    }

    /// Renders the report as a sequence of lines, without line terminators.
    pub fn render(&self, work_period: &WorkPeriod) -> Vec<String> {
        let mut lines = vec![
            format!("Start of period: {}", format_date(&work_period.begin)),
            format!("End of period: {}", format_date(&work_period.end)),
            HEADER_RULE.to_string(),
        ];

        // Must return before the footer: the work/day average divides by the day count.
        if work_period.is_empty() {
            lines.push(NO_ENTRIES.to_string());
            return lines;
        }

        let mut total_work = Duration::zero();
        for day in &work_period.days {
            total_work = total_work + self.render_day(day, &mut lines);
        }

        let days = work_period.days.len();
        lines.push(String::new());
        lines.push("TOTAL".to_string());
        lines.push(TOTAL_RULE.to_string());
        lines.push(format!("Work duration: {}", format_duration(&total_work)));
        lines.push(format!("Days: {}", days));
        lines.push(format!("Work/day: {}", format_duration(&average_per_day(&total_work, days))));

        lines
    }

    /// Appends one day section and returns the running work total of its entries.
    fn render_day(&self, day: &Day, lines: &mut Vec<String>) -> Duration {
        lines.push(String::new());
        lines.push(format_date(&day.date));
        lines.push(DAY_RULE.to_string());

        let mut day_work = Duration::zero();
        let mut per_project: BTreeMap<&str, Duration> = BTreeMap::new();
        for entry in &day.entries {
            lines.push(entry_line(entry));
            if !entry.is_break {
                day_work = day_work + entry.duration();
                let project_total = per_project.entry(entry.project.name.as_str()).or_insert_with(Duration::zero);
                *project_total = *project_total + entry.duration();
            }
        }

        // Same sum as Day::work_duration(), taken in the pass that prints the entries.
        lines.push("Summary:".to_string());
        lines.push(format!("\tTotal work time: {}", format_duration(&day_work)));
        if self.project_summary {
            for (project, duration) in per_project {
                lines.push(format!("\t{}: {}", project, format_duration(&duration)));
            }
        }

        day_work
    }
}

fn entry_line(entry: &Entry) -> String {
    format!(
        "{} - {}: {}{} ==> {}",
        format_time(&entry.begin),
        format_time(&entry.end),
        entry.project.name,
        if entry.is_break { " (break)" } else { "" },
        format_duration(&entry.duration())
    )
}

impl OutputPlugin for TextReport {
    fn name(&self) -> &'static str {
        "text"
    }

    /// Writes the report line by line. `config` is ignored.
    fn output(&self, work_period: &WorkPeriod, _config: Option<&Value>, sink: &mut dyn Write) -> Result<()> {
        tracing::debug!(days = work_period.days.len(), project_summary = self.project_summary, "rendering text report");
        for line in self.render(work_period) {
            writeln!(sink, "{}", line)?;
        }
        sink.flush()?;
        Ok(())
    }
}
