//! Inquiry service error types.

use std::fmt;

use thiserror::Error;

use rocketcall_core::ValidationError;

use crate::db::RepositoryError;

/// Which store operation failed; selects the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Insert,
    List,
    Update,
    Delete,
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Insert => "insert",
            Self::List => "list",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

/// Errors that can occur during inquiry operations.
#[derive(Debug, Error)]
pub enum InquiryError {
    /// Client input failed a presence or enumeration check.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The record store failed.
    #[error("store {action} failed: {source}")]
    Storage {
        action: StoreAction,
        #[source]
        source: RepositoryError,
    },
}

impl InquiryError {
    pub(crate) fn storage(action: StoreAction) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Storage { action, source }
    }
}
