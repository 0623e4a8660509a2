//! Validation errors for client-supplied inquiry data.

use thiserror::Error;

/// A client-side fault in submitted data.
///
/// Only presence and membership are checked; phone numbers and names are
/// free text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was absent or blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Status value outside the known set.
    #[error("invalid status: {0:?}")]
    InvalidStatus(String),

    /// Identifier is not a well-formed UUID.
    #[error("invalid inquiry id: {0:?}")]
    InvalidId(String),
}
