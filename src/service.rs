//! Domain façade over the task store.

use crate::db::Database;
use crate::error::Result;
use crate::format;
use crate::types::Task;
use tracing::debug;

/// Translates domain operations into store calls and renders
/// presentation-ready listings.
///
/// Each operation issues exactly one store call. Listing operations return
/// the rendered text; printing is left to the command surface.
pub struct TaskService {
    db: Database,
}

impl TaskService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create a new task.
    ///
    /// The title reaches the store as given; length validation happens at
    /// the command surface before this call.
    pub fn add_task(&self, title: &str) -> Result<Task> {
        let task = self.db.create_task(title)?;
        debug!(id = task.id, "task created");
        Ok(task)
    }

    /// All tasks, one line each with completion marker, id, title and
    /// creation time.
    pub fn list_all_tasks(&self) -> Result<String> {
        let tasks = self.db.get_all_tasks()?;
        Ok(format::render_all(&tasks))
    }

    /// Tasks filtered by completion status under a section header.
    ///
    /// This rendering omits the completion marker used by
    /// [`TaskService::list_all_tasks`].
    pub fn list_by_status(&self, completed: bool) -> Result<String> {
        let tasks = self.db.get_tasks_by_status(completed)?;
        Ok(format::render_by_status(&tasks, completed))
    }

    /// Incomplete tasks only, in pipe-delimited form.
    pub fn list_pending_tasks(&self) -> Result<String> {
        let tasks = self.db.get_tasks_by_status(false)?;
        Ok(format::render_pending(&tasks))
    }

    /// Mark a task completed. A missing id is a silent no-op.
    pub fn complete_task(&self, id: i64) -> Result<()> {
        self.db.update_task_status(id, true)
    }

    /// Remove a task. A missing id is a silent no-op.
    pub fn delete_task(&self, id: i64) -> Result<()> {
        self.db.delete_task(id)
    }

    /// Remove every task, unconditionally. The confirmation prompt guarding
    /// this lives at the command surface.
    pub fn clear_tasks(&self) -> Result<()> {
        debug!("clearing all tasks");
        self.db.delete_all_tasks()
    }
}
