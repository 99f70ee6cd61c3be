//! Diagnostic logging setup.
//!
//! The filter is read from `TASKDESK_LOG`, then `RUST_LOG`, and defaults to
//! `warn`. Calling [`init`] more than once is harmless: only the first call
//! installs a subscriber.

use crate::libs::messages::Message;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TASKDESK_LOG";
const DEFAULT_FILTER: &str = "warn";

pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if let Err(error) = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().try_init() {
        // Another subscriber is already installed; keep it.
        tracing::debug!("{}", Message::LoggingInitFailed(error.to_string()));
    }
    Ok(())
}
