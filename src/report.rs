//! Markdown rendering for tool output. Deterministic: the same input
//! always produces the same text.

use crate::models::{MonthCompliance, Project};
use std::fmt::Write;

/// Render a month's invalid days as a markdown report.
pub fn render_month_report(result: &MonthCompliance) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Invalid Days for {}\n", result.month_label());
    let _ = writeln!(
        out,
        "**Total Invalid Days:** {}\n",
        result.invalid_days.len()
    );

    if result.invalid_days.is_empty() {
        out.push_str("No invalid days found for this month.\n");
        return out;
    }

    for day in &result.invalid_days {
        let _ = writeln!(out, "## {}", day.date);
        let _ = writeln!(out, "- **Current Hours:** {}h", day.current_hours);
        let _ = writeln!(out, "- **Expected Hours:** {}h", day.expected_hours);
        let _ = writeln!(out, "- **Shortfall:** {}h", day.shortfall_hours);
        let _ = writeln!(
            out,
            "- **Working Day:** {}",
            if day.is_working_day { "Yes" } else { "No" }
        );
        let _ = writeln!(
            out,
            "- **Holiday:** {}",
            if day.is_holiday { "Yes" } else { "No" }
        );
        let _ = writeln!(out, "- **Issue:** {}", day.issue);

        if day.entries.is_empty() {
            out.push_str("- **Current Log Entries:** None\n");
        } else {
            out.push_str("- **Current Log Entries:**\n");
            for entry in &day.entries {
                let _ = writeln!(
                    out,
                    "  - {}: {}h ({})",
                    entry.project_name, entry.hours, entry.comment
                );
            }
        }
        out.push('\n');
    }

    out
}

/// Render the project list as markdown.
pub fn render_projects(projects: &[Project]) -> String {
    let mut out = String::from("# Available Projects\n\n");
    if projects.is_empty() {
        out.push_str("No projects found.\n");
        return out;
    }
    for project in projects {
        let _ = writeln!(out, "- **{}** (ID: {})", project.name, project.id);
    }
    out
}
