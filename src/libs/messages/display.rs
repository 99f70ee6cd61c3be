//! Display implementation for taskdesk messages.
//!
//! Single source of truth for user-facing text. Variants carrying data
//! interpolate it here so call sites never build strings themselves.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskSaved(title) => format!("Task saved: {}", title),
            Message::TaskDeleted(title) => format!("Task deleted: {}", title),
            Message::TaskSaveFailed => "Failed to save task".to_string(),
            Message::TaskLoadFailed => "Failed to load tasks".to_string(),
            Message::TaskDeleteFailed => "Failed to delete task".to_string(),
            Message::TasksLoaded(count) => format!("Loaded {} tasks from database", count),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),

            // === STATUS BAR MESSAGES ===
            Message::ShowingTasks { visible, total } => format!("Showing {} of {} tasks", visible, total),
            Message::AllTasksVisible => "All tasks visible".to_string(),
            Message::VisibleTaskCount(count) => format!("{} tasks", count),
            Message::CompletionRate(percent) => format!("{}%", percent),

            // === STORAGE MESSAGES ===
            Message::DbInitialized(path) => format!("Database initialized at {}", path),
            Message::DbInitFailed(path) => format!("Failed to initialize database at {}", path),
            Message::DataDirCreateFailed(path) => format!("Failed to create data directory {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigReadFailed(path) => format!("Failed to read configuration file {}", path),
            Message::ConfigParseError(path) => format!("Failed to parse configuration file {}", path),
            Message::ConfigSaveError(path) => format!("Failed to save configuration file {}", path),
            Message::LoggingInitFailed(error) => format!("Failed to initialize logging: {}", error),

            // === ALERT TITLES ===
            Message::AlertInitializationTitle => "Initialization Error".to_string(),
            Message::AlertInitializationHeader => "Failed to initialize application".to_string(),
            Message::AlertInvalidInputTitle => "Invalid Input".to_string(),
            Message::AlertInvalidInputHeader => "Please correct the following issues:".to_string(),
            Message::AlertSaveTitle => "Save Error".to_string(),
            Message::AlertLoadTitle => "Load Error".to_string(),
            Message::AlertDeletionTitle => "Deletion Error".to_string(),
            Message::AlertNoSelectionTitle => "No Selection".to_string(),
            Message::AlertNoSelectionHeader => "No Task Selected".to_string(),
            Message::AlertNoSelectionContent => "Please select a task to perform this action".to_string(),
            Message::AlertDeleteConfirmTitle => "Delete Task".to_string(),
            Message::AlertDeleteConfirmHeader => "Confirm Deletion".to_string(),
        };
        write!(f, "{}", text)
    }
}
