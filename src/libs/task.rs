//! Task entity and its derived status.
//!
//! A [`Task`] is identified solely by its [`TaskId`]. Every other field is
//! freely mutable by the edit workflow; the identifier is assigned once, either
//! when a task is created or when it is reconstructed from storage.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{Days, Local};
//! use taskdesk::libs::task::{Priority, Task};
//!
//! let due = Local::now().date_naive() + Days::new(3);
//! let mut task = Task::with_details("Write report", "Quarterly numbers", Priority::High, due);
//! task.category = "Work".to_string();
//! assert!(!task.is_overdue());
//! ```

use chrono::{Days, Local, NaiveDate};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use uuid::Uuid;

/// Category assigned to tasks that were never given one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Returns the current calendar date from the system clock.
///
/// Used by every date-dependent rule so that "today" is read fresh on each
/// call and stays correct across midnight.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Opaque, immutable task identifier.
///
/// Fresh identifiers are random v4 UUIDs rendered as strings. Identifiers read
/// back from storage are kept verbatim, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl ToSql for TaskId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.as_str()))
    }
}

impl FromSql for TaskId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(TaskId::from)
    }
}

/// Importance of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Token used in storage: `LOW`, `MEDIUM` or `HIGH`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored priority token is not one of `LOW`, `MEDIUM`, `HIGH`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority '{0}'")]
pub struct ParsePriorityError(pub String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            other => Err(ParsePriorityError(other.to_string())),
        }
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// Display status of a task, derived from completion and due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    Overdue,
    Today,
    Active,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "Completed",
            TaskStatus::Overdue => "Overdue",
            TaskStatus::Today => "Today",
            TaskStatus::Active => "Active",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single task.
///
/// Equality and hashing consider only [`Task::id`]; two values with the same
/// identifier are the same task even if their other fields differ.
#[derive(Debug, Clone)]
pub struct Task {
    id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub completed: bool,
    pub category: String,
}

impl Task {
    /// Creates an empty task due tomorrow with medium priority.
    pub fn new() -> Self {
        let tomorrow = today() + Days::new(1);
        Self::with_details("", "", Priority::Medium, tomorrow)
    }

    /// Creates a task with the given details and a fresh identifier.
    pub fn with_details(title: &str, description: &str, priority: Priority, due_date: NaiveDate) -> Self {
        Self {
            id: TaskId::new(),
            title: title.to_string(),
            description: Some(description.to_string()),
            priority,
            due_date,
            completed: false,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Rebuilds a task from a stored row, keeping its identifier.
    pub fn from_storage(
        id: TaskId,
        title: String,
        description: Option<String>,
        priority: Priority,
        due_date: NaiveDate,
        completed: bool,
        category: String,
    ) -> Self {
        Self {
            id,
            title,
            description,
            priority,
            due_date,
            completed,
            category,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// True when the task is open and its due date is before today.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_on(today())
    }

    /// Same as [`Task::is_overdue`] against an explicit reference date.
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }

    /// True when the task is due on the current date, regardless of completion.
    pub fn is_due_today(&self) -> bool {
        self.is_due_on(today())
    }

    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due_date == date
    }

    pub fn status(&self) -> TaskStatus {
        self.status_on(today())
    }

    /// Completed wins over overdue, which wins over due today.
    pub fn status_on(&self, today: NaiveDate) -> TaskStatus {
        if self.completed {
            TaskStatus::Completed
        } else if self.is_overdue_on(today) {
            TaskStatus::Overdue
        } else if self.is_due_on(today) {
            TaskStatus::Today
        } else {
            TaskStatus::Active
        }
    }
}

impl Default for Task {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task{{id='{}', title='{}', priority={}, dueDate={}, completed={}, category='{}'}}",
            self.id, self.title, self.priority, self.due_date, self.completed, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new();
        assert_eq!(task.title, "");
        assert_eq!(task.description.as_deref(), Some(""));
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, today() + Days::new(1));
        assert!(!task.completed);
        assert_eq!(task.category, DEFAULT_CATEGORY);
        assert!(!task.is_overdue());
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let ids: HashSet<TaskId> = (0..1000).map(|_| TaskId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_overdue_rule() {
        let reference = date(2024, 5, 10);
        let mut task = Task::with_details("Pay rent", "", Priority::High, date(2024, 5, 9));

        assert!(task.is_overdue_on(reference));
        assert!(!task.is_overdue_on(date(2024, 5, 9)));

        task.completed = true;
        assert!(!task.is_overdue_on(reference));
    }

    #[test]
    fn test_overdue_uses_system_clock() {
        let mut task = Task::with_details("Yesterday", "", Priority::Low, today() - Days::new(1));
        assert!(task.is_overdue());
        task.completed = true;
        assert!(!task.is_overdue());
    }

    #[test]
    fn test_equality_is_identity_only() {
        let task = Task::with_details("A", "first", Priority::Low, date(2024, 1, 1));
        let mut renamed = task.clone();
        renamed.title = "B".to_string();
        renamed.completed = true;
        assert_eq!(task, renamed);

        let other = Task::with_details("A", "first", Priority::Low, date(2024, 1, 1));
        assert_ne!(task, other);

        let set: HashSet<Task> = [task, renamed, other].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_status_precedence() {
        let reference = date(2024, 5, 10);
        let mut task = Task::with_details("Status", "", Priority::Medium, date(2024, 5, 1));
        assert_eq!(task.status_on(reference), TaskStatus::Overdue);

        task.due_date = reference;
        assert_eq!(task.status_on(reference), TaskStatus::Today);

        task.due_date = date(2024, 6, 1);
        assert_eq!(task.status_on(reference), TaskStatus::Active);

        task.due_date = date(2024, 5, 1);
        task.completed = true;
        assert_eq!(task.status_on(reference), TaskStatus::Completed);
    }

    #[test]
    fn test_priority_tokens() {
        for priority in Priority::ALL {
            assert_eq!(priority.as_str().parse::<Priority>().unwrap(), priority);
        }
        assert_eq!("medium".parse::<Priority>(), Err(ParsePriorityError("medium".to_string())));
        assert_eq!(Priority::default(), Priority::Medium);
    }
}
