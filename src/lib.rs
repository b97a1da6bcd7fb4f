//! # Stunden
//!
//! Renders tracked work periods as human-readable reports.
//!
//! ## Features
//!
//! - **Work Period Model**: Days, entries, breaks and projects with validation on load
//! - **Pluggable Outputs**: Outputs share one trait and receive an opaque configuration section
//! - **Text Report**: Per-day entry listing with daily, total and per-day average work time
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stunden::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
