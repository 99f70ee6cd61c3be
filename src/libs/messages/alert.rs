//! Modal dialog contents for the presentation layer.
//!
//! The core never shows dialogs itself. It turns failures into an [`Alert`]
//! (title, header, content) that a front end renders however it likes.

use super::types::Message;
use crate::libs::error::{Error, StoreError};
use crate::libs::validation::ValidationErrors;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Information,
    Confirmation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub header: String,
    pub content: String,
}

impl Alert {
    fn new(kind: AlertKind, title: Message, header: Message, content: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            header: header.to_string(),
            content: content.into(),
        }
    }

    /// Lists every problem of a rejected edit form.
    pub fn invalid_input(errors: &ValidationErrors) -> Self {
        Self::new(
            AlertKind::Error,
            Message::AlertInvalidInputTitle,
            Message::AlertInvalidInputHeader,
            errors.to_string(),
        )
    }

    /// Fatal startup failure; the application cannot continue.
    pub fn initialization(detail: impl fmt::Display) -> Self {
        Self::new(
            AlertKind::Error,
            Message::AlertInitializationTitle,
            Message::AlertInitializationHeader,
            detail.to_string(),
        )
    }

    pub fn no_selection() -> Self {
        Self::new(
            AlertKind::Information,
            Message::AlertNoSelectionTitle,
            Message::AlertNoSelectionHeader,
            Message::AlertNoSelectionContent.to_string(),
        )
    }

    pub fn confirm_delete(title: &str) -> Self {
        Self::new(
            AlertKind::Confirmation,
            Message::AlertDeleteConfirmTitle,
            Message::AlertDeleteConfirmHeader,
            Message::ConfirmDeleteTask(title.to_string()).to_string(),
        )
    }

    /// Picks the dialog matching the operation that failed.
    pub fn from_store_error(error: &StoreError) -> Self {
        let (title, header) = match error {
            StoreError::Save { .. } => (Message::AlertSaveTitle, Message::TaskSaveFailed),
            StoreError::Load { .. } => (Message::AlertLoadTitle, Message::TaskLoadFailed),
            StoreError::Delete { .. } => (Message::AlertDeletionTitle, Message::TaskDeleteFailed),
            StoreError::Open { .. } | StoreError::Initialize { .. } | StoreError::NotInitialized => {
                (Message::AlertInitializationTitle, Message::AlertInitializationHeader)
            }
        };
        Self::new(AlertKind::Error, title, header, describe(error))
    }
}

/// The error followed by each of its causes, separated by `: `.
fn describe(error: &dyn std::error::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

impl From<&Error> for Alert {
    fn from(error: &Error) -> Self {
        match error {
            Error::Validation(errors) => Alert::invalid_input(errors),
            Error::NotFound(_) => Alert::no_selection(),
            Error::Store(store) => Alert::from_store_error(store),
        }
    }
}

impl From<&anyhow::Error> for Alert {
    fn from(error: &anyhow::Error) -> Self {
        Alert::initialization(format!("{:#}", error))
    }
}
