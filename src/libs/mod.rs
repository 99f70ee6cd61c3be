//! Core library modules for taskdesk.
//!
//! - **Domain**: tasks, the in-memory collection, filtering and form validation
//! - **Workflows**: the [`session::Session`] facade and progress statistics
//! - **Infrastructure**: configuration, data directory, errors, logging, messages
//!
//! ## Usage
//!
//! ```rust
//! use taskdesk::libs::filter::Visibility;
//! use taskdesk::libs::task::{Priority, Task};
//! use taskdesk::libs::task_list::TaskList;
//!
//! let mut list = TaskList::new("Home");
//! let mut task = Task::new();
//! task.title = "Fix the gate".to_string();
//! task.priority = Priority::High;
//! list.add(task);
//!
//! let visible = Visibility::from_input(Some("High Priority"), "gate", &list).apply(&list);
//! assert_eq!(visible.len(), 1);
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod filter;
pub mod logging;
pub mod messages;
pub mod session;
pub mod summary;
pub mod task;
pub mod task_list;
pub mod validation;
