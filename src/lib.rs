//! backup-rotate - Scheduled single-file backup rotation
//!
//! This library provides the core functionality for the backup-rotate
//! command. Each run archives the file scheduled for today, copies it to a
//! file server, deletes the files scheduled for the days ahead, and emails
//! the operator the result.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration loading and path management
//! - `error`: Custom error types
//! - `models`: Weekdays and the weekday-to-file schedule
//! - `logging`: Structured per-day run log
//! - `notify`: Status emails
//! - `backup`: Archive, transfer, retention, and the run workflow
//! - `cli`: Command handlers
//! - `display`: Terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use backup_rotate::config::Settings;
//! use backup_rotate::cli::handle_run_command;
//!
//! let settings = Settings::load(Path::new("config.json"))?;
//! let outcome = handle_run_command(&settings, chrono::Local::now().date_naive());
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod notify;

pub use error::{RotationError, RotationResult};
