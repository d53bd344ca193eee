//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the rotation runner.

pub mod rotate;

pub use rotate::{handle_config_command, handle_plan_command, handle_run_command};
