//! Settings display formatting

use std::path::Path;

use crate::config::Settings;
use crate::logging::LogEntry;
use crate::models::DayOfWeek;

/// Format the loaded configuration for `backup-rotate config`
///
/// `recent` holds the latest entries of today's log, oldest first.
pub fn format_settings(
    config_path: &Path,
    log_file: &Path,
    settings: &Settings,
    recent: &[LogEntry],
) -> String {
    let mut output = String::new();

    output.push_str("backup-rotate Configuration\n");
    output.push_str("===========================\n");
    output.push_str(&format!("Config file:      {}\n", config_path.display()));
    output.push_str(&format!(
        "Source directory: {}\n",
        settings.source_directory.display()
    ));
    output.push_str(&format!(
        "File server:      {}\n",
        settings.file_server_directory.display()
    ));
    output.push_str(&format!("Today's log file: {}\n", log_file.display()));
    output.push_str(&format!("Days to delete:   {}\n", settings.days_to_delete));
    output.push('\n');

    output.push_str("Schedule:\n");
    for day in DayOfWeek::ALL {
        let file = settings.files.file_for(day).unwrap_or("-");
        output.push_str(&format!("  {:<10} {}\n", day.name(), file));
    }
    output.push('\n');

    let email = &settings.email_settings;
    output.push_str("Email:\n");
    output.push_str(&format!("  From:   {}\n", email.sender));
    output.push_str(&format!("  To:     {}\n", email.recipient));
    output.push_str(&format!(
        "  Server: {}:{} (STARTTLS)\n",
        email.smtp_server, email.smtp_port
    ));
    output.push_str(&format!(
        "  Auth:   {}\n",
        if email.credentials().is_some() {
            "enabled"
        } else {
            "disabled"
        }
    ));

    if !recent.is_empty() {
        output.push('\n');
        output.push_str("Recent log entries:\n");
        for entry in recent {
            output.push_str(&format!("  {}\n", entry.format_line()));
        }
    }

    output
}
