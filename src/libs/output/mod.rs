//! Pluggable outputs for rendering work periods.
//!
//! An output takes a fully built [`WorkPeriod`] plus an optional, opaque
//! configuration value and writes it to a sink. Outputs never mutate or keep
//! the period; each call is a single read pass.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stunden::libs::output::OutputFormat;
//! use stunden::libs::work_period::WorkPeriod;
//! use std::path::Path;
//!
//! let period = WorkPeriod::load(Path::new("september.json"))?;
//! let plugin = OutputFormat::Text.plugin(false);
//! plugin.output(&period, None, &mut std::io::stdout())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod text;

use crate::libs::work_period::WorkPeriod;
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

pub use text::TextReport;

/// Capability shared by every output: render a work period to a sink.
pub trait OutputPlugin {
    /// Key used to look up this output's section in the configuration file.
    fn name(&self) -> &'static str;

    /// Renders `work_period` to `sink`.
    ///
    /// `config` is whatever the configuration file holds for this output.
    /// Outputs without a configuration schema must accept any value,
    /// including `None`.
    fn output(&self, work_period: &WorkPeriod, config: Option<&Value>, sink: &mut dyn Write) -> Result<()>;

    /// Describes the configuration this output understands.
    ///
    /// `None` means the output cannot be configured.
    fn configuration_schema(&self) -> Option<Value> {
        None
    }
}

/// Output formats selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text report, one line per entry with daily and period totals.
    Text,
}

impl OutputFormat {
    /// Builds the plugin for this format.
    ///
    /// `project_summary` adds per-project totals where the format supports them.
    pub fn plugin(&self, project_summary: bool) -> Box<dyn OutputPlugin> {
        match self {
            OutputFormat::Text => Box::new(TextReport::new().with_project_summary(project_summary)),
        }
    }
}
