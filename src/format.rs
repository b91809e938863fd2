//! Rendering for the task listings.
//!
//! The three listing commands render differently on purpose: `list` shows a
//! completion marker, the status listings show a section header instead,
//! and the pending listing is pipe-delimited. Each shape is kept as its own
//! named renderer so the differences stay visible in one place.

use crate::types::Task;

/// Timestamp layout used by every listing.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder emitted when a listing matches no tasks.
pub const EMPTY_PLACEHOLDER: &str = "No tasks found.";

fn marker(completed: bool) -> &'static str {
    if completed { "x" } else { " " }
}

/// One `[x] 1. Buy milk (2026-08-06 09:30:00)` line per task.
pub fn render_all(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return format!("{EMPTY_PLACEHOLDER}\n");
    }

    let mut out = String::new();
    for task in tasks {
        out.push_str(&format!(
            "[{}] {}. {} ({})\n",
            marker(task.completed),
            task.id,
            task.title,
            task.created_at.format(TIMESTAMP_FORMAT),
        ));
    }
    out
}

/// Section header, then one `1. Buy milk (2026-08-06 09:30:00)` line per
/// task. No completion marker.
pub fn render_by_status(tasks: &[Task], completed: bool) -> String {
    let header = if completed {
        "Completed Tasks:"
    } else {
        "Pending Tasks:"
    };

    let mut out = String::new();
    out.push_str(header);
    out.push('\n');

    if tasks.is_empty() {
        out.push_str(EMPTY_PLACEHOLDER);
        out.push('\n');
        return out;
    }

    for task in tasks {
        out.push_str(&format!(
            "{}. {} ({})\n",
            task.id,
            task.title,
            task.created_at.format(TIMESTAMP_FORMAT),
        ));
    }
    out
}

/// One `ID: 1 | Title: Buy milk | Created: 2026-08-06 09:30:00` line per
/// task.
pub fn render_pending(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return format!("{EMPTY_PLACEHOLDER}\n");
    }

    let mut out = String::new();
    for task in tasks {
        out.push_str(&format!(
            "ID: {} | Title: {} | Created: {}\n",
            task.id,
            task.title,
            task.created_at.format(TIMESTAMP_FORMAT),
        ));
    }
    out
}
