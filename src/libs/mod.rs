//! Core library modules for stunden.
//!
//! - **Data Model**: [`work_period`] with validation on load
//! - **Rendering**: [`formatter`] helpers and the [`output`] plugins
//! - **Infrastructure**: [`config`], [`data_storage`] and [`messages`]

pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod output;
pub mod work_period;
