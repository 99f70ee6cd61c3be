use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::libs::task_list::TaskList;

/// Counts behind the progress bar and status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
    pub visible: usize,
}

impl Progress {
    pub fn new(tasks: &TaskList, visible: &[&Task]) -> Self {
        Self {
            total: tasks.count(),
            completed: tasks.completed_count(),
            visible: visible.len(),
        }
    }

    /// Share of completed tasks in `[0.0, 1.0]`; zero for an empty list.
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    /// Completion rate as a whole percentage, e.g. `"40%"`.
    pub fn percent_label(&self) -> String {
        let percent = (self.completion_rate() * 100.0).round() as u32;
        Message::CompletionRate(percent).to_string()
    }

    pub fn status_text(&self) -> String {
        if self.visible == self.total {
            Message::AllTasksVisible.to_string()
        } else {
            Message::ShowingTasks {
                visible: self.visible,
                total: self.total,
            }
            .to_string()
        }
    }

    pub fn count_label(&self) -> String {
        Message::VisibleTaskCount(self.visible).to_string()
    }
}
