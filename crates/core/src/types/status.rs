//! Inquiry status lifecycle.
//!
//! An inquiry is created `pending` and an operator may move it freely between
//! the three states. There is no transition graph.

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Processing status of an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "inquiry_status", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    /// Newly submitted, nobody has called back yet.
    #[default]
    Pending,
    /// An operator reached the customer.
    Contacted,
    /// Handled; nothing left to do.
    Completed,
}

impl InquiryStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Contacted, Self::Completed];

    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Contacted => "contacted",
            Self::Completed => "completed",
        }
    }

    /// Operator-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "대기중",
            Self::Contacted => "연락완료",
            Self::Completed => "처리완료",
        }
    }
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InquiryStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "contacted" => Ok(Self::Contacted),
            "completed" => Ok(Self::Completed),
            _ => Err(ValidationError::InvalidStatus(s.to_owned())),
        }
    }
}

/// Admin list tab: everything, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(InquiryStatus),
}

impl StatusFilter {
    /// Tabs in display order.
    pub const TABS: [Self; 4] = [
        Self::All,
        Self::Only(InquiryStatus::Pending),
        Self::Only(InquiryStatus::Contacted),
        Self::Only(InquiryStatus::Completed),
    ];

    /// Parse a `tab` query value. Unknown or missing values fall back to `All`.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse::<InquiryStatus>().ok())
            .map_or(Self::All, Self::Only)
    }

    /// Query value for links and hidden form fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    /// Tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "전체",
            Self::Only(status) => status.label(),
        }
    }

    /// Whether an inquiry with `status` belongs on this tab.
    #[must_use]
    pub fn matches(self, status: InquiryStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}
