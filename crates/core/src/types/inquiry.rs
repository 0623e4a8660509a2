//! The inquiry entity and its intake form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{InquiryId, InquiryStatus, ValidationError};

/// A stored lead-capture submission.
///
/// `id` and `created_at` are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Inquiry {
    pub id: InquiryId,
    pub name: String,
    pub phone: String,
    pub message: String,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

/// A validated submission, ready to insert.
///
/// Construct with [`NewInquiry::parse`]. The stored status is always
/// [`InquiryStatus::Pending`]; there is no way to request another one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    name: String,
    phone: String,
    message: String,
}

impl NewInquiry {
    /// Validate raw form values.
    ///
    /// Surrounding whitespace is trimmed; a blank `name` or `phone` counts as
    /// missing. A missing `message` becomes the empty string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` naming the first absent field.
    pub fn parse(
        name: Option<&str>,
        phone: Option<&str>,
        message: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let name = required(name, "name")?;
        let phone = required(phone, "phone")?;
        let message = message.map(str::trim).unwrap_or_default().to_owned();

        Ok(Self {
            name,
            phone,
            message,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status every new inquiry is stored with.
    #[must_use]
    pub const fn status(&self) -> InquiryStatus {
        InquiryStatus::Pending
    }
}

fn required(value: Option<&str>, field: &'static str) -> Result<String, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_owned()),
        _ => Err(ValidationError::MissingField(field)),
    }
}
