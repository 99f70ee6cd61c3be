//! In-memory task collection.
//!
//! [`TaskList`] keeps tasks in insertion order and answers read-only queries
//! over them. Query results borrow from the list and never change it;
//! [`TaskList::all_tasks`] hands out an owned copy instead.
//!
//! `add` does not check for an existing task with the same identifier. The
//! edit workflow uses [`TaskList::upsert`] when it needs replace-or-append.

use super::task::{Priority, Task, TaskId, DEFAULT_CATEGORY};
use chrono::NaiveDate;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct TaskList {
    name: String,
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tasks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a task. Returns `false` and leaves the list untouched when
    /// given `None`.
    pub fn add(&mut self, task: impl Into<Option<Task>>) -> bool {
        match task.into() {
            Some(task) => {
                self.tasks.push(task);
                true
            }
            None => false,
        }
    }

    /// Replaces the task with the same identifier in place, or appends it.
    ///
    /// Returns `true` when an existing entry was replaced.
    pub fn upsert(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|existing| **existing == task) {
            Some(existing) => {
                *existing = task;
                true
            }
            None => {
                self.tasks.push(task);
                false
            }
        }
    }

    /// Removes the first task equal to `task` (same identifier).
    pub fn remove(&mut self, task: &Task) -> bool {
        match self.tasks.iter().position(|existing| existing == task) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every task carrying `id`. Returns whether anything was removed.
    pub fn remove_by_id(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        self.tasks.len() != before
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Owned copy of every task, in insertion order.
    pub fn all_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn by_completion(&self, completed: bool) -> Vec<&Task> {
        self.select(|task| task.completed == completed)
    }

    pub fn by_priority(&self, priority: Priority) -> Vec<&Task> {
        self.select(|task| task.priority == priority)
    }

    /// Tasks whose category equals `category`, ignoring case.
    pub fn by_category(&self, category: &str) -> Vec<&Task> {
        let wanted = category.to_lowercase();
        self.select(|task| task.category.to_lowercase() == wanted)
    }

    pub fn overdue(&self) -> Vec<&Task> {
        self.select(Task::is_overdue)
    }

    pub fn overdue_on(&self, today: NaiveDate) -> Vec<&Task> {
        self.select(|task| task.is_overdue_on(today))
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Distinct non-empty categories, sorted, always including the default one.
    pub fn categories(&self) -> BTreeSet<String> {
        let mut categories = BTreeSet::from([DEFAULT_CATEGORY.to_string()]);
        categories.extend(
            self.tasks
                .iter()
                .map(|task| task.category.as_str())
                .filter(|category| !category.is_empty())
                .map(str::to_string),
        );
        categories
    }

    /// Tasks matching an arbitrary predicate, in list order.
    pub fn select<F>(&self, predicate: F) -> Vec<&Task>
    where
        F: Fn(&Task) -> bool,
    {
        self.tasks.iter().filter(|&task| predicate(task)).collect()
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            name: String::new(),
            tasks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
