//! Configuration module for backup-rotate
//!
//! This module provides configuration management including:
//! - Configuration file resolution
//! - Settings loading and validation
//! - Dated log file layout

pub mod paths;
pub mod settings;

pub use paths::{daily_log_file, resolve_config_path};
pub use settings::{EmailSettings, Settings};
