//! Core data models for backup-rotate
//!
//! This module contains the weekday model and the weekday-to-file schedule
//! that drives which file is archived and which are rotated out.

pub mod schedule;
pub mod weekday;

pub use schedule::FileSchedule;
pub use weekday::{get_next_days, DayOfWeek, DAYS_IN_WEEK};
