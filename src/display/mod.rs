//! Display formatting for terminal output
//!
//! Provides utilities for formatting plans and settings for the `plan` and
//! `config` commands.

pub mod plan;
pub mod settings;

pub use plan::format_plan;
pub use settings::format_settings;
