/// Every user-facing text in taskdesk.
///
/// Text lives in the `Display` implementation in `display.rs`; call sites only
/// pick a variant and supply its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskSaved(String),   // title
    TaskDeleted(String), // title
    TaskSaveFailed,
    TaskLoadFailed,
    TaskDeleteFailed,
    TasksLoaded(usize),
    ConfirmDeleteTask(String), // title

    // === STATUS BAR MESSAGES ===
    ShowingTasks { visible: usize, total: usize },
    AllTasksVisible,
    VisibleTaskCount(usize),
    CompletionRate(u32), // percent

    // === STORAGE MESSAGES ===
    DbInitialized(String), // path
    DbInitFailed(String),  // path
    DataDirCreateFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigReadFailed(String),  // path
    ConfigParseError(String),  // path
    ConfigSaveError(String),   // path
    LoggingInitFailed(String), // error

    // === ALERT TITLES ===
    AlertInitializationTitle,
    AlertInitializationHeader,
    AlertInvalidInputTitle,
    AlertInvalidInputHeader,
    AlertSaveTitle,
    AlertLoadTitle,
    AlertDeletionTitle,
    AlertNoSelectionTitle,
    AlertNoSelectionHeader,
    AlertNoSelectionContent,
    AlertDeleteConfirmTitle,
    AlertDeleteConfirmHeader,
}
