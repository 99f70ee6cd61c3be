//! Persistence gateway for tasks.
//!
//! Stores one row per task in a single `tasks` table keyed by the task
//! identifier. The gateway keeps nothing but the database location: every
//! call opens its own connection and closes it before returning, so each save
//! or delete commits on its own.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::Tasks;
//! use taskdesk::libs::task::Task;
//!
//! let mut tasks = Tasks::new("taskdesk.db");
//! tasks.initialize()?;
//!
//! let mut task = Task::new();
//! task.title = "Renew passport".to_string();
//! tasks.save(&task)?;
//!
//! let loaded = tasks.load_all()?;
//! assert_eq!(loaded.count(), 1);
//! # Ok::<(), taskdesk::libs::error::StoreError>(())
//! ```

use super::db::Db;
use crate::libs::error::StoreError;
use crate::libs::task::{Task, TaskId};
use crate::libs::task_list::TaskList;
use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    priority TEXT NOT NULL,
    due_date TEXT NOT NULL,
    completed INTEGER NOT NULL,
    category TEXT NOT NULL
)";
const SAVE_TASK: &str = "INSERT OR REPLACE INTO tasks (id, title, description, priority, due_date, completed, category) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_TASKS: &str = "SELECT id, title, description, priority, due_date, completed, category FROM tasks";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Name given to the collection returned by [`Tasks::load_all`].
pub const LOADED_LIST_NAME: &str = "All Tasks";

pub struct Tasks {
    path: PathBuf,
    initialized: bool,
}

impl Tasks {
    /// Creates a gateway for the database at `path`. Nothing is opened until
    /// [`Tasks::initialize`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            initialized: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Creates the `tasks` table if it does not exist yet.
    ///
    /// Safe to call on every startup. Fails with [`StoreError::Open`] when the
    /// database file cannot be opened or created.
    pub fn initialize(&mut self) -> Result<(), StoreError> {
        let db = Db::open(&self.path).map_err(|source| {
            tracing::error!(path = %self.path.display(), error = %source, "Database initialization failed");
            StoreError::Open {
                path: self.path.clone(),
                source,
            }
        })?;
        db.conn.execute(SCHEMA_TASKS, []).map_err(|source| {
            tracing::error!(error = %source, "Database initialization failed");
            StoreError::Initialize { source }
        })?;

        self.initialized = true;
        tracing::info!(path = %self.path.display(), "Database initialized successfully");
        Ok(())
    }

    /// Inserts the task, or overwrites every column of the row with the same
    /// identifier. Returns whether a row was written.
    pub fn save(&self, task: &Task) -> Result<bool, StoreError> {
        let failed = |source: rusqlite::Error| {
            tracing::error!(task_id = %task.id(), error = %source, "Failed to save task");
            StoreError::Save {
                id: task.id().clone(),
                source,
            }
        };

        let db = self.connect(&failed)?;
        let rows = db
            .conn
            .execute(
                SAVE_TASK,
                params![
                    task.id(),
                    task.title,
                    task.description,
                    task.priority,
                    task.due_date,
                    task.completed,
                    task.category
                ],
            )
            .map_err(&failed)?;

        tracing::debug!(task_id = %task.id(), rows, "Saved task");
        Ok(rows > 0)
    }

    /// Reads every stored task into a new collection, in the order SQLite
    /// returns the rows.
    pub fn load_all(&self) -> Result<TaskList, StoreError> {
        let failed = |source: rusqlite::Error| {
            tracing::error!(error = %source, "Failed to load tasks");
            StoreError::Load { source }
        };

        let db = self.connect(&failed)?;
        let tasks = Self::fetch_all(&db.conn).map_err(&failed)?;

        let mut list = TaskList::new(LOADED_LIST_NAME);
        for task in tasks {
            list.add(task);
        }

        tracing::info!(count = list.count(), "Loaded tasks from database");
        Ok(list)
    }

    /// Removes the row for `id`. Returns `false` when there was none.
    pub fn delete_by_id(&self, id: &TaskId) -> Result<bool, StoreError> {
        let failed = |source: rusqlite::Error| {
            tracing::error!(task_id = %id, error = %source, "Failed to delete task");
            StoreError::Delete { id: id.clone(), source }
        };

        let db = self.connect(&failed)?;
        let rows = db.conn.execute(DELETE_TASK, params![id]).map_err(&failed)?;

        tracing::debug!(task_id = %id, rows, "Deleted task");
        Ok(rows > 0)
    }

    /// Opens a connection for one operation. An open failure is reported as
    /// that operation's error, through `failed`.
    fn connect(&self, failed: impl FnOnce(rusqlite::Error) -> StoreError) -> Result<Db, StoreError> {
        if !self.initialized {
            return Err(StoreError::NotInitialized);
        }
        Db::open(&self.path).map_err(failed)
    }

    fn fetch_all(conn: &Connection) -> rusqlite::Result<Vec<Task>> {
        let mut stmt = conn.prepare(SELECT_TASKS)?;
        let task_iter = stmt.query_map([], Self::task_from_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task::from_storage(
            row.get("id")?,
            row.get("title")?,
            row.get("description")?,
            row.get("priority")?,
            row.get("due_date")?,
            row.get("completed")?,
            row.get("category")?,
        ))
    }
}
