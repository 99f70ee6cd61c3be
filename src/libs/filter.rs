//! Filter and search engine.
//!
//! Turns the filter label chosen by the user plus the free-text search box into
//! a single visibility predicate over the task collection. Nothing here is
//! cached: the predicate is rebuilt from the current label, search text and
//! date every time it is asked for.
//!
//! ## Recognized labels
//!
//! | Label               | Keeps                                   |
//! |---------------------|-----------------------------------------|
//! | `All Tasks`         | everything                              |
//! | `Active Tasks`      | not completed                           |
//! | `Completed Tasks`   | completed                               |
//! | `High Priority` ... | that priority                           |
//! | `Due Today`         | due date equals today                   |
//! | `Overdue`           | [`Task::is_overdue`]                    |
//! | `Category: X`       | category equals `X`, ignoring case      |
//! | `X`                 | same, when `X` is a known category      |
//!
//! Anything else means "no restriction".

use super::task::{today, Priority, Task};
use super::task_list::TaskList;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;

pub const ALL_TASKS: &str = "All Tasks";
pub const ACTIVE_TASKS: &str = "Active Tasks";
pub const COMPLETED_TASKS: &str = "Completed Tasks";
pub const HIGH_PRIORITY: &str = "High Priority";
pub const MEDIUM_PRIORITY: &str = "Medium Priority";
pub const LOW_PRIORITY: &str = "Low Priority";
pub const DUE_TODAY: &str = "Due Today";
pub const OVERDUE: &str = "Overdue";
pub const CATEGORY_PREFIX: &str = "Category: ";

/// Built-in labels in the order they are offered to the user.
pub const BUILTIN_LABELS: [&str; 8] = [
    ALL_TASKS,
    ACTIVE_TASKS,
    COMPLETED_TASKS,
    HIGH_PRIORITY,
    MEDIUM_PRIORITY,
    LOW_PRIORITY,
    DUE_TODAY,
    OVERDUE,
];

/// A parsed filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
    Priority(Priority),
    DueToday,
    Overdue,
    /// Category match, compared case-insensitively.
    Category(String),
}

impl TaskFilter {
    /// Parses a filter label against the categories currently in use.
    ///
    /// Built-in labels are matched exactly. A bare label is treated as a
    /// category only when it names one of `categories` (ignoring case);
    /// otherwise the result is [`TaskFilter::All`].
    pub fn parse(label: &str, categories: &BTreeSet<String>) -> Self {
        match label {
            ALL_TASKS => TaskFilter::All,
            ACTIVE_TASKS => TaskFilter::Active,
            COMPLETED_TASKS => TaskFilter::Completed,
            HIGH_PRIORITY => TaskFilter::Priority(Priority::High),
            MEDIUM_PRIORITY => TaskFilter::Priority(Priority::Medium),
            LOW_PRIORITY => TaskFilter::Priority(Priority::Low),
            DUE_TODAY => TaskFilter::DueToday,
            OVERDUE => TaskFilter::Overdue,
            other => {
                if let Some(category) = other.strip_prefix(CATEGORY_PREFIX).filter(|name| !name.trim().is_empty()) {
                    TaskFilter::Category(category.to_string())
                } else if categories.iter().any(|known| same_category(known, other)) {
                    TaskFilter::Category(other.to_string())
                } else {
                    TaskFilter::All
                }
            }
        }
    }

    /// Parses an optional label; no selection means no restriction.
    pub fn from_selection(label: Option<&str>, tasks: &TaskList) -> Self {
        match label {
            Some(label) => Self::parse(label, &tasks.categories()),
            None => TaskFilter::All,
        }
    }

    /// Label that parses back to this filter.
    pub fn label(&self) -> String {
        match self {
            TaskFilter::All => ALL_TASKS.to_string(),
            TaskFilter::Active => ACTIVE_TASKS.to_string(),
            TaskFilter::Completed => COMPLETED_TASKS.to_string(),
            TaskFilter::Priority(Priority::High) => HIGH_PRIORITY.to_string(),
            TaskFilter::Priority(Priority::Medium) => MEDIUM_PRIORITY.to_string(),
            TaskFilter::Priority(Priority::Low) => LOW_PRIORITY.to_string(),
            TaskFilter::DueToday => DUE_TODAY.to_string(),
            TaskFilter::Overdue => OVERDUE.to_string(),
            TaskFilter::Category(category) => format!("{}{}", CATEGORY_PREFIX, category),
        }
    }

    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
            TaskFilter::Priority(priority) => task.priority == *priority,
            TaskFilter::DueToday => task.is_due_on(today),
            TaskFilter::Overdue => task.is_overdue_on(today),
            TaskFilter::Category(category) => same_category(&task.category, category),
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

fn same_category(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive substring search over title, description and category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, task: &Task) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let description = task.description.as_deref().unwrap_or_default();
        [task.title.as_str(), description, task.category.as_str()]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Combined filter and search selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Visibility {
    pub filter: TaskFilter,
    pub search: SearchQuery,
}

impl Visibility {
    pub fn new(filter: TaskFilter, search: SearchQuery) -> Self {
        Self { filter, search }
    }

    /// Builds a visibility from raw user input.
    pub fn from_input(label: Option<&str>, search: &str, tasks: &TaskList) -> Self {
        Self::new(TaskFilter::from_selection(label, tasks), SearchQuery::new(search))
    }

    pub fn matches_on(&self, task: &Task, today: NaiveDate) -> bool {
        self.filter.matches(task, today) && self.search.matches(task)
    }

    /// Predicate for callers that filter their own view of the tasks.
    pub fn predicate(&self, today: NaiveDate) -> impl Fn(&Task) -> bool + '_ {
        move |task: &Task| self.matches_on(task, today)
    }

    /// Visible subset of `tasks` as of the current date.
    pub fn apply<'a>(&self, tasks: &'a TaskList) -> Vec<&'a Task> {
        self.apply_on(tasks, today())
    }

    pub fn apply_on<'a>(&self, tasks: &'a TaskList, today: NaiveDate) -> Vec<&'a Task> {
        tasks.select(self.predicate(today))
    }
}

/// Every label the user can pick: the built-in ones, then each category.
pub fn filter_options(tasks: &TaskList) -> Vec<String> {
    BUILTIN_LABELS
        .iter()
        .map(|label| label.to_string())
        .chain(tasks.categories())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reference() -> NaiveDate {
        date(2024, 5, 10)
    }

    fn sample() -> TaskList {
        let mut list = TaskList::new("All Tasks");

        let mut a = Task::with_details("Prepare slides", "Work presentation", Priority::High, date(2024, 5, 20));
        a.category = "Work".to_string();
        list.add(a);

        let mut b = Task::with_details("Water plants", "", Priority::Low, date(2024, 5, 1));
        b.category = "Home".to_string();
        b.completed = true;
        list.add(b);

        list
    }

    fn titles(tasks: Vec<&Task>) -> Vec<String> {
        tasks.iter().map(|task| task.title.clone()).collect()
    }

    fn visible(list: &TaskList, label: &str, search: &str) -> Vec<String> {
        titles(Visibility::from_input(Some(label), search, list).apply_on(list, reference()))
    }

    #[test]
    fn test_builtin_filters() {
        let list = sample();
        assert_eq!(visible(&list, ALL_TASKS, ""), ["Prepare slides", "Water plants"]);
        assert_eq!(visible(&list, HIGH_PRIORITY, ""), ["Prepare slides"]);
        assert_eq!(visible(&list, LOW_PRIORITY, ""), ["Water plants"]);
        assert!(visible(&list, MEDIUM_PRIORITY, "").is_empty());
        assert_eq!(visible(&list, COMPLETED_TASKS, ""), ["Water plants"]);
        assert_eq!(visible(&list, ACTIVE_TASKS, ""), ["Prepare slides"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let list = sample();
        assert_eq!(visible(&list, ALL_TASKS, "work"), ["Prepare slides"]);
        assert_eq!(visible(&list, ALL_TASKS, "PLANTS"), ["Water plants"]);
        assert_eq!(visible(&list, ALL_TASKS, "home"), ["Water plants"]);
        assert!(visible(&list, ALL_TASKS, "garage").is_empty());
    }

    #[test]
    fn test_search_tolerates_missing_description() {
        let mut task = Task::with_details("Call bank", "", Priority::Medium, reference());
        task.description = None;
        assert!(SearchQuery::new("bank").matches(&task));
        assert!(SearchQuery::new("").matches(&task));
        assert!(!SearchQuery::new("loan").matches(&task));
    }

    #[test]
    fn test_filter_and_search_combine() {
        let list = sample();
        assert!(visible(&list, COMPLETED_TASKS, "slides").is_empty());
        assert_eq!(visible(&list, ACTIVE_TASKS, "slides"), ["Prepare slides"]);
    }

    #[test]
    fn test_due_today_is_not_overdue() {
        let mut list = TaskList::new("All Tasks");
        list.add(Task::with_details("Due now", "", Priority::Medium, reference()));
        list.add(Task::with_details("Late", "", Priority::Medium, date(2024, 5, 9)));

        assert_eq!(visible(&list, DUE_TODAY, ""), ["Due now"]);
        assert_eq!(visible(&list, OVERDUE, ""), ["Late"]);
    }

    #[test]
    fn test_unrecognized_label_shows_everything() {
        let list = sample();
        assert_eq!(visible(&list, "Stale filter", ""), ["Prepare slides", "Water plants"]);
        assert_eq!(visible(&list, "", ""), ["Prepare slides", "Water plants"]);
        assert_eq!(visible(&list, "all tasks", ""), ["Prepare slides", "Water plants"]);
        assert_eq!(TaskFilter::from_selection(None, &list), TaskFilter::All);
    }

    #[test]
    fn test_category_labels_ignore_case() {
        let list = sample();
        assert_eq!(visible(&list, "Category: work", ""), ["Prepare slides"]);
        assert_eq!(visible(&list, "Category: WORK", ""), ["Prepare slides"]);
        assert_eq!(visible(&list, "Work", ""), ["Prepare slides"]);
        // Bare labels follow the same case rule as the explicit form.
        assert_eq!(visible(&list, "home", ""), ["Water plants"]);
        // Explicit form with an unknown category simply matches nothing.
        assert!(visible(&list, "Category: Garden", "").is_empty());
    }

    #[test]
    fn test_general_is_always_a_category() {
        let mut list = TaskList::new("All Tasks");
        list.add(Task::with_details("Default", "", Priority::Medium, reference()));
        let mut other = Task::with_details("Other", "", Priority::Medium, reference());
        other.category = "Errands".to_string();
        list.add(other);

        assert_eq!(visible(&list, "General", ""), ["Default"]);
    }

    #[test]
    fn test_labels_round_trip() {
        let categories = BTreeSet::from(["Work".to_string()]);
        for label in BUILTIN_LABELS {
            assert_eq!(TaskFilter::parse(label, &categories).label(), label);
        }
        assert_eq!(TaskFilter::parse("Work", &categories).label(), "Category: Work");
    }

    #[test]
    fn test_filter_options() {
        let list = sample();
        let options = filter_options(&list);
        assert_eq!(&options[..8], BUILTIN_LABELS);
        assert_eq!(&options[8..], ["General", "Home", "Work"]);
    }
}
