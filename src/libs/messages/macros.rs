//! Macros that carry catalogue messages out of the core.
//!
//! The core never writes to stdout or stderr. `msg_debug!` emits a `tracing`
//! event only in debug mode (`TASKDESK_DEBUG` or `RUST_LOG` set), and
//! `msg_error_anyhow!` turns a message into an `anyhow::Error` for the caller
//! to present.
//!
//! ```rust
//! use taskdesk::{msg_debug, msg_error_anyhow};
//! use taskdesk::libs::messages::Message;
//!
//! msg_debug!(Message::AllTasksVisible);
//! let error = msg_error_anyhow!(Message::TaskSaveFailed);
//! assert_eq!(error.to_string(), "❌ Failed to save task");
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether `msg_debug!` emits events. Checked once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKDESK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Debug-only output; silent unless debug mode is on.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}
