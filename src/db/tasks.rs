//! Task CRUD operations.

use super::Database;
use crate::error::{Error, Result};
use crate::types::Task;
use rusqlite::{Connection, Row, params};

const TASK_COLUMNS: &str = "id, title, completed, created_at";

fn parse_task_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        completed: row.get("completed")?,
        created_at: row.get("created_at")?,
    })
}

/// Fetch a task using an existing connection.
fn get_task_internal(conn: &Connection, id: i64) -> Result<Option<Task>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"
    ))?;

    match stmt.query_row(params![id], parse_task_row) {
        Ok(task) => Ok(Some(task)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Database {
    /// Insert a new task with `completed = false` and a store-assigned
    /// creation timestamp, and return the persisted record.
    ///
    /// The title is stored as given; validation is the caller's concern.
    pub fn create_task(&self, title: &str) -> Result<Task> {
        self.with_conn(|conn| {
            conn.execute("INSERT INTO tasks (title) VALUES (?1)", params![title])?;
            let id = conn.last_insert_rowid();

            // Read the row back so the returned record carries the
            // timestamp SQLite actually stored.
            get_task_internal(conn, id)?
                .ok_or(Error::Query(rusqlite::Error::QueryReturnedNoRows))
        })
    }

    /// Fetch a single task by id. Returns `None` when no such task exists.
    pub fn get_task(&self, id: i64) -> Result<Option<Task>> {
        self.with_conn(|conn| get_task_internal(conn, id))
    }

    /// All tasks in primary-key order. Empty when the table is empty.
    pub fn get_all_tasks(&self) -> Result<Vec<Task>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY id"))?;
            let tasks = stmt
                .query_map([], parse_task_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(tasks)
        })
    }

    /// Tasks whose completion flag matches `completed`, in primary-key
    /// order. Empty when none match.
    pub fn get_tasks_by_status(&self, completed: bool) -> Result<Vec<Task>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {TASK_COLUMNS} FROM tasks WHERE completed = ?1 ORDER BY id"
            ))?;
            let tasks = stmt
                .query_map(params![completed], parse_task_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(tasks)
        })
    }

    /// Set the completion flag.
    ///
    /// A missing id is a silent no-op; callers that need existence
    /// information should use [`Database::get_task`].
    pub fn update_task_status(&self, id: i64, completed: bool) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE tasks SET completed = ?1 WHERE id = ?2",
                params![completed, id],
            )?;
            Ok(())
        })
    }

    /// Full update of title and completion flag. Same missing-id semantics
    /// as [`Database::update_task_status`].
    pub fn update_task(&self, task: &Task) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE tasks SET title = ?1, completed = ?2 WHERE id = ?3",
                params![task.title, task.completed, task.id],
            )?;
            Ok(())
        })
    }

    /// Delete a task. Silently succeeds when the id does not exist.
    pub fn delete_task(&self, id: i64) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
            Ok(())
        })
    }

    /// Delete every task, unconditionally.
    pub fn delete_all_tasks(&self) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM tasks", [])?;
            Ok(())
        })
    }
}
