//! Work period rendering command.
//!
//! Loads a serialized work period, validates it and hands it to the selected
//! output together with that output's configuration section.

use crate::{
    libs::{
        config::Config,
        messages::Message,
        output::OutputFormat,
        work_period::WorkPeriod,
    },
    msg_bail_anyhow, msg_debug, msg_error, msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Command-line arguments for the render command.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Work period JSON file; reads stdin when omitted or `-`
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Add per-project work totals to each day's summary
    #[arg(long)]
    pub project_summary: bool,

    /// Configuration file to use instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Executes the render command.
///
/// Configuration problems are reported and fall back to defaults, since no
/// output requires configuration. An invalid work period aborts the command.
pub fn cmd(args: RenderArgs) -> Result<()> {
    let config = load_config(args.config.as_deref());

    msg_debug!(Message::LoadingWorkPeriod(args.input.display().to_string()));
    let work_period =
        WorkPeriod::load(&args.input).map_err(|e| msg_error_anyhow!(Message::WorkPeriodInvalid(e.to_string())))?;
    msg_debug!(Message::WorkPeriodLoaded {
        days: work_period.days.len(),
        begin: work_period.begin.to_string(),
        end: work_period.end.to_string(),
    });

    let plugin = args.format.plugin(args.project_summary);
    let plugin_config = config.output_config(plugin.name());

    match args.out {
        Some(path) => {
            msg_info!(Message::RenderingReport(plugin.name().to_string()));
            let mut sink = create_report_file(&path)?;
            plugin.output(&work_period, plugin_config, &mut sink)?;
            msg_success!(Message::ReportWritten(path.display().to_string()));
        }
        None => {
            let stdout = io::stdout();
            let mut sink = stdout.lock();
            plugin.output(&work_period, plugin_config, &mut sink)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Config {
    let loaded = match path {
        Some(path) => Config::read_from(path),
        None => Config::read(),
    };
    loaded.unwrap_or_else(|e| {
        msg_error!(Message::ConfigLoadFailed(e.to_string()));
        Config::default()
    })
}

fn create_report_file(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        if !parent.exists() {
            msg_bail_anyhow!(Message::ReportWriteFailed(format!("directory {} does not exist", parent.display())));
        }
    }
    let file = File::create(path).map_err(|e| msg_error_anyhow!(Message::ReportWriteFailed(e.to_string())))?;
    Ok(BufWriter::new(file))
}
