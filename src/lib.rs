//! # Taskdesk
//!
//! The core of a single-user desktop task tracker: a task model, an in-memory
//! collection, filtering and search, and an SQLite store.
//!
//! ## Features
//!
//! - **Tasks**: title, description, priority, due date, category and completion
//! - **Filtering**: built-in views, per-category views and free-text search
//! - **Persistence**: one SQLite table, upsert on save, a fresh connection per call
//! - **Workflows**: validated create/edit, delete and completion toggling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::libs::logging;
//! use taskdesk::libs::messages::Alert;
//! use taskdesk::libs::session::Session;
//!
//! logging::init()?;
//! match Session::open("taskdesk.db") {
//!     Ok(session) => println!("{}", session.progress().status_text()),
//!     Err(error) => eprintln!("{}", Alert::from(&error).content),
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod db;
pub mod libs;
