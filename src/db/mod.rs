//! Database layer for taskdesk.
//!
//! Task persistence built on SQLite. The schema is a single `tasks` table that
//! is created on first use; there is no migration history.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::Tasks;
//!
//! let mut tasks = Tasks::new("/tmp/taskdesk.db");
//! tasks.initialize()?;
//! let all = tasks.load_all()?;
//! println!("{} tasks", all.count());
//! # Ok::<(), taskdesk::libs::error::StoreError>(())
//! ```
//!
//! ## Connection Management
//!
//! Connections are never shared. Each gateway call opens one [`db::Db`],
//! runs its statement and drops the connection before returning, including
//! when the statement fails.

/// Scoped SQLite connection.
pub mod db;

/// Task persistence gateway: schema setup, upsert, load and delete.
pub mod tasks;
