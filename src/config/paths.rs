//! Path management for backup-rotate
//!
//! Resolves the configuration file and the dated log file locations.
//!
//! ## Config Resolution Order
//!
//! 1. `--config` flag (if given)
//! 2. `BACKUP_ROTATE_CONFIG` environment variable (if set)
//! 3. `config.json` in the current working directory

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};

/// Environment variable that overrides the configuration file location
pub const CONFIG_ENV_VAR: &str = "BACKUP_ROTATE_CONFIG";

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Resolve which configuration file to load
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    match std::env::var(CONFIG_ENV_VAR) {
        Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

/// Directory holding one month of log files: `<log_dir>/<year>/<Month name>`
pub fn monthly_log_dir(log_dir: &Path, date: NaiveDate) -> PathBuf {
    log_dir
        .join(date.year().to_string())
        .join(date.format("%B").to_string())
}

/// Log file for a single day: `<log_dir>/<year>/<Month name>/<YYYY-MM-DD>.log`
pub fn daily_log_file(log_dir: &Path, date: NaiveDate) -> PathBuf {
    monthly_log_dir(log_dir, date).join(format!("{}.log", date.format("%Y-%m-%d")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_daily_log_file() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let path = daily_log_file(Path::new("/var/log/rotate"), date);
        assert_eq!(
            path,
            PathBuf::from("/var/log/rotate/2025/March/2025-03-07.log")
        );
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_config_path(Some(PathBuf::from("/etc/rotate.json")));
        assert_eq!(path, PathBuf::from("/etc/rotate.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join("rotate.yaml");

        // Set the env var
        env::set_var(CONFIG_ENV_VAR, &custom);

        let path = resolve_config_path(None);
        assert_eq!(path, custom);

        // Clean up
        env::remove_var(CONFIG_ENV_VAR);
    }
}
