//! Rotation settings for backup-rotate
//!
//! Loaded once at startup from a JSON (or YAML) file and passed by reference
//! to everything that needs it. Nothing here is mutated during a run.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RotationError, RotationResult};
use crate::models::FileSchedule;

/// SMTP settings for status emails
#[derive(Clone, Serialize, Deserialize)]
pub struct EmailSettings {
    /// Envelope and header sender address
    pub sender: String,

    /// Single recipient of every status email
    pub recipient: String,

    /// SMTP relay host
    pub smtp_server: String,

    /// SMTP port, usually 587 for STARTTLS
    pub smtp_port: u16,

    /// Login name, used only together with `password`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Connection and command timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl EmailSettings {
    /// Credentials, when both halves are configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) if !user.is_empty() => Some((user, pass)),
            _ => None,
        }
    }
}

impl fmt::Debug for EmailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailSettings")
            .field("sender", &self.sender)
            .field("recipient", &self.recipient)
            .field("smtp_server", &self.smtp_server)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Settings for one rotation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory the daily backup files are written to
    pub source_directory: PathBuf,

    /// Directory the compressed archive is copied to
    pub file_server_directory: PathBuf,

    /// Which file belongs to which weekday
    pub files: FileSchedule,

    /// Root of the `<year>/<month>/<date>.log` hierarchy
    pub log_directory: PathBuf,

    pub email_settings: EmailSettings,

    /// How many upcoming days of scheduled files to delete after a backup
    pub days_to_delete: usize,
}

impl Settings {
    /// Load settings from a file
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML, everything else
    /// as JSON. The result is validated before being returned.
    pub fn load(path: &Path) -> RotationResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RotationError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings = if is_yaml(path) {
            Self::from_yaml(&contents)?
        } else {
            Self::from_json(&contents)?
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a JSON document without validating them
    pub fn from_json(contents: &str) -> RotationResult<Self> {
        serde_json::from_str(contents).map_err(|e| {
            RotationError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Parse settings from a YAML document without validating them
    pub fn from_yaml(contents: &str) -> RotationResult<Self> {
        serde_yaml::from_str(contents).map_err(|e| {
            RotationError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Reject settings that cannot produce a meaningful run
    pub fn validate(&self) -> RotationResult<()> {
        if self.source_directory.as_os_str().is_empty() {
            return Err(RotationError::Configuration(
                "source_directory cannot be empty".into(),
            ));
        }

        if self.file_server_directory.as_os_str().is_empty() {
            return Err(RotationError::Configuration(
                "file_server_directory cannot be empty".into(),
            ));
        }

        if self.log_directory.as_os_str().is_empty() {
            return Err(RotationError::Configuration(
                "log_directory cannot be empty".into(),
            ));
        }

        let email = &self.email_settings;
        if email.sender.trim().is_empty() || email.recipient.trim().is_empty() {
            return Err(RotationError::Configuration(
                "email_settings.sender and email_settings.recipient are required".into(),
            ));
        }

        if email.smtp_server.trim().is_empty() {
            return Err(RotationError::Configuration(
                "email_settings.smtp_server cannot be empty".into(),
            ));
        }

        if email.smtp_port == 0 {
            return Err(RotationError::Configuration(
                "email_settings.smtp_port must be non-zero".into(),
            ));
        }

        self.files.validate()
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}
