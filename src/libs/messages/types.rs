#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String), // path
    ConfigDeleted(String),
    ConfigNotFound,
    ConfigLoadFailed(String),

    // === WORK PERIOD MESSAGES ===
    LoadingWorkPeriod(String), // source
    WorkPeriodLoaded { days: usize, begin: String, end: String },
    WorkPeriodInvalid(String),

    // === REPORT MESSAGES ===
    RenderingReport(String), // output name
    ReportWritten(String),   // path
    ReportWriteFailed(String),
}
