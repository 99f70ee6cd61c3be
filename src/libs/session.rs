//! The workflow facade a front end drives.
//!
//! A [`Session`] owns the one in-memory [`TaskList`] of the running
//! application together with the gateway that persists it. Every mutating
//! workflow writes to the database first and only touches memory once the
//! write succeeded, so a failed save or delete leaves the list exactly as it
//! was.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::libs::config::Config;
//! use taskdesk::libs::session::Session;
//! use taskdesk::libs::validation::TaskDraft;
//!
//! let mut session = Session::from_config(&Config::read()?)?;
//!
//! let draft = TaskDraft {
//!     title: "Water the plants".to_string(),
//!     ..TaskDraft::default()
//! };
//! session.save(&draft, None)?;
//!
//! session.set_filter(Some("Active Tasks"));
//! println!("{}", session.progress().status_text());
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::error::{Error, Result};
use crate::libs::filter::{filter_options, TaskFilter, Visibility};
use crate::libs::messages::Message;
use crate::libs::summary::Progress;
use crate::libs::task::{Task, TaskId};
use crate::libs::task_list::TaskList;
use crate::libs::validation::TaskDraft;
use crate::msg_debug;
use anyhow::Context;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::path::PathBuf;

pub struct Session {
    store: Tasks,
    tasks: TaskList,
    filter_label: Option<String>,
    search: String,
}

impl Session {
    /// Initializes the database at `path` and loads every stored task.
    ///
    /// Any failure here is fatal for the application.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let mut store = Tasks::new(path);
        let location = store.path().display().to_string();

        store.initialize().with_context(|| Message::DbInitFailed(location.clone()))?;
        msg_debug!(Message::DbInitialized(location));

        let tasks = store.load_all().context(Message::TaskLoadFailed)?;
        msg_debug!(Message::TasksLoaded(tasks.count()));

        Ok(Self {
            store,
            tasks,
            filter_label: None,
            search: String::new(),
        })
    }

    /// Opens the database the configuration resolves to.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let path = config.db_path()?;
        Self::open(path)
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// The filter currently in effect, re-derived from the selected label.
    pub fn filter(&self) -> TaskFilter {
        TaskFilter::from_selection(self.filter_label.as_deref(), &self.tasks)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_filter(&mut self, label: Option<&str>) {
        self.filter_label = label.map(str::to_string);
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    fn visibility(&self) -> Visibility {
        Visibility::from_input(self.filter_label.as_deref(), &self.search, &self.tasks)
    }

    /// Tasks passing both the selected filter and the search text.
    pub fn visible(&self) -> Vec<&Task> {
        self.visibility().apply(&self.tasks)
    }

    pub fn visible_on(&self, today: NaiveDate) -> Vec<&Task> {
        self.visibility().apply_on(&self.tasks, today)
    }

    pub fn filter_options(&self) -> Vec<String> {
        filter_options(&self.tasks)
    }

    pub fn categories(&self) -> BTreeSet<String> {
        self.tasks.categories()
    }

    pub fn progress(&self) -> Progress {
        Progress::new(&self.tasks, &self.visible())
    }

    /// Creates a task from `draft`, or updates the task `editing` names.
    ///
    /// The draft is validated and applied to a copy; the copy is persisted
    /// and only then replaces the in-memory task.
    pub fn save(&mut self, draft: &TaskDraft, editing: Option<&TaskId>) -> Result<Task> {
        let mut task = match editing {
            Some(id) => self.tasks.get(id).cloned().ok_or_else(|| Error::NotFound(id.clone()))?,
            None => Task::new(),
        };
        draft.apply_to(&mut task)?;

        self.store.save(&task)?;
        self.tasks.upsert(task.clone());
        msg_debug!(Message::TaskSaved(task.title.clone()));
        Ok(task)
    }

    /// Deletes the task from the database, then from memory.
    ///
    /// Returns `false` when neither held a task with that identifier.
    pub fn delete(&mut self, id: &TaskId) -> Result<bool> {
        let title = self.tasks.get(id).map(|task| task.title.clone());
        let deleted = self.store.delete_by_id(id)?;
        let removed = self.tasks.remove_by_id(id);

        if let Some(title) = title {
            msg_debug!(Message::TaskDeleted(title));
        }
        Ok(deleted || removed)
    }

    /// Flips the completion flag and persists the result.
    pub fn toggle_completed(&mut self, id: &TaskId) -> Result<Task> {
        let mut task = self.tasks.get(id).cloned().ok_or_else(|| Error::NotFound(id.clone()))?;
        task.completed = !task.completed;

        self.store.save(&task)?;
        self.tasks.upsert(task.clone());
        Ok(task)
    }
}
