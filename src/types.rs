//! Core types for the todo CLI.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single to-do record.
///
/// `id` and `created_at` are assigned by the store on creation and never
/// change afterwards; `completed` is the only field the command surface
/// mutates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    /// Creation time in UTC, second precision.
    pub created_at: NaiveDateTime,
}
