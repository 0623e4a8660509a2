//! Core types for RocketCall.
//!
//! This module provides type-safe wrappers for the inquiry domain.

pub mod id;
pub mod inquiry;
pub mod status;
pub mod validation;

pub use id::*;
pub use inquiry::{Inquiry, NewInquiry};
pub use status::{InquiryStatus, StatusFilter};
pub use validation::ValidationError;
