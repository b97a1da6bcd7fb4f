//! Display implementation for stunden messages.
//!
//! All user-facing status text lives here so commands only pick a
//! [`Message`] variant and never build strings themselves.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigDeleted(path) => format!("Configuration removed: {}", path),
            Message::ConfigNotFound => "No configuration file found, nothing to remove.".to_string(),
            Message::ConfigLoadFailed(error) => format!("Failed to load configuration: {}", error),

            // === WORK PERIOD MESSAGES ===
            Message::LoadingWorkPeriod(source) => format!("Loading work period from {}", source),
            Message::WorkPeriodLoaded { days, begin, end } => {
                format!("Loaded work period {} - {} with {} day(s)", begin, end, days)
            }
            Message::WorkPeriodInvalid(error) => format!("Invalid work period: {}", error),

            // === REPORT MESSAGES ===
            Message::RenderingReport(output) => format!("Rendering {} report...", output),
            Message::ReportWritten(path) => format!("Report written to {}", path),
            Message::ReportWriteFailed(error) => format!("Failed to write report: {}", error),
        };
        write!(f, "{}", text)
    }
}
