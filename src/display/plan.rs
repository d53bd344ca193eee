//! Plan display formatting
//!
//! Formats a `RunPlan` as a fixed-width table for `backup-rotate plan`.

use crate::backup::RunPlan;

fn status(exists: bool) -> &'static str {
    if exists {
        "present"
    } else {
        "missing"
    }
}

/// Format a run plan for terminal output
pub fn format_plan(plan: &RunPlan) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Backup plan for {} ({})\n",
        plan.date.format("%Y-%m-%d"),
        plan.day
    ));
    output.push_str(&format!("{}\n", "=".repeat(40)));

    match &plan.source {
        None => {
            output.push_str(&format!("No file configured for {}.\n", plan.day));
            output.push_str("A run on this date would fail.\n");
            return output;
        }
        Some(source) => {
            output.push_str(&format!(
                "Source:      {} [{}]\n",
                source.path.display(),
                status(source.exists)
            ));
            output.push_str(&format!("Archive:     {}\n", source.archive_name));
            output.push_str(&format!("Destination: {}\n", source.destination.display()));
            if !source.exists {
                output.push_str("A run on this date would fail: source file is missing.\n");
            }
        }
    }

    output.push('\n');

    if plan.deletions.is_empty() {
        output.push_str("Retention window: nothing scheduled.\n");
        return output;
    }

    output.push_str("Retention window:\n");

    let name_width = plan
        .deletions
        .iter()
        .map(|d| d.candidate.path.display().to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    output.push_str(&format!(
        "  {:<10}  {:<name_width$}  {}\n",
        "Day",
        "File",
        "Action",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "  {:-<10}  {:-<name_width$}  {:-<10}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for deletion in &plan.deletions {
        let action = if deletion.exists { "delete" } else { "skip" };
        output.push_str(&format!(
            "  {:<10}  {:<name_width$}  {}\n",
            deletion.candidate.day.name(),
            deletion.candidate.path.display().to_string(),
            action,
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "\n{} file(s) would be deleted.\n",
        plan.pending_deletions().count()
    ));

    output
}
