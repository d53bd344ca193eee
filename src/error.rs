//! Custom error types for backup-rotate
//!
//! This module defines the error hierarchy for a rotation run using thiserror
//! for ergonomic error definitions.

use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::DayOfWeek;

/// Which part of the archive pipeline failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// Writing the zip archive
    Compress,
    /// Copying the archive to the file server
    Transfer,
}

impl std::fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingStage::Compress => write!(f, "compression"),
            ProcessingStage::Transfer => write!(f, "transfer"),
        }
    }
}

/// The main error type for backup-rotate operations
#[derive(Error, Debug)]
pub enum RotationError {
    /// Configuration-related errors, including a weekday with no mapped file
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The file scheduled for today is not in the source directory
    #[error("File not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    /// Compression or transfer failed
    #[error("Backup {stage} failed for {}: {source}", .path.display())]
    Processing {
        stage: ProcessingStage,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A backup inside the retention window could not be deleted
    #[error("Failed to delete backup file for {day} at {}: {source}", .path.display())]
    Deletion {
        day: DayOfWeek,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The temporary archive could not be removed
    #[error("Error during cleanup of {}: {source}", .path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Status email could not be sent
    #[error("Notification error: {0}")]
    Notification(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl RotationError {
    /// Create a configuration error for a weekday with no mapped file
    pub fn unmapped_day(day: DayOfWeek) -> Self {
        Self::Configuration(format!(
            "No file configured for {}. Check the config file.",
            day
        ))
    }

    /// Check if this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Render the error followed by its full source chain
    ///
    /// Used as the detail in log entries and failure emails.
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut current = StdError::source(self);
        while let Some(cause) = current {
            out.push_str(&format!("\n  caused by: {}", cause));
            current = cause.source();
        }
        out
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for RotationError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RotationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for backup-rotate operations
pub type RotationResult<T> = Result<T, RotationError>;
