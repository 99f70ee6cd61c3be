//! Edit-form values and their validation.
//!
//! A [`TaskDraft`] holds what the user typed before anything is persisted.
//! [`TaskDraft::validate`] reports every missing field at once so the user can
//! fix them in one pass.

use super::task::{today, Priority, Task, DEFAULT_CATEGORY};
use chrono::{Days, NaiveDate};
use std::fmt;

/// Problems found in a draft, one line per field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    problems: Vec<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn problems(&self) -> &[String] {
        &self.problems
    }

    fn require_non_empty(&mut self, value: &str, field: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.problems.push(format!("{} is required", field));
        }
        self
    }

    fn require_selected(&mut self, value: Option<&str>, field: &str) -> &mut Self {
        if value.map_or(true, |value| value.trim().is_empty()) {
            self.problems.push(format!("{} must be selected", field));
        }
        self
    }

    fn require_some<T>(&mut self, value: Option<T>, field: &str) -> &mut Self {
        if value.is_none() {
            self.problems.push(format!("{} must be selected", field));
        }
        self
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for problem in &self.problems {
            writeln!(f, "- {}", problem)?;
        }
        Ok(())
    }
}

/// Field values gathered from the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub completed: bool,
}

impl Default for TaskDraft {
    /// A cleared form: default category, due tomorrow, medium priority.
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            category: Some(DEFAULT_CATEGORY.to_string()),
            due_date: Some(today() + Days::new(1)),
            priority: Priority::Medium,
            completed: false,
        }
    }
}

impl TaskDraft {
    /// Pre-fills the form from an existing task.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            category: Some(task.category.clone()),
            due_date: Some(task.due_date),
            priority: task.priority,
            completed: task.completed,
        }
    }

    /// Checks title, category and due date.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors
            .require_non_empty(&self.title, "Title")
            .require_selected(self.category.as_deref(), "Category")
            .require_some(self.due_date, "Due Date");

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Copies the draft onto `task`, keeping the task's identifier.
    ///
    /// Validates first; `task` is untouched when validation fails.
    pub fn apply_to(&self, task: &mut Task) -> Result<(), ValidationErrors> {
        self.validate()?;
        task.title = self.title.clone();
        task.description = self.description.clone();
        task.priority = self.priority;
        task.completed = self.completed;
        if let Some(category) = &self.category {
            task.category = category.clone();
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        Ok(())
    }
}
