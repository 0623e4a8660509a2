//! Business logic services.
//!
//! # Services
//!
//! - `inquiries` - Intake, listing, status changes and deletion of inquiries

pub mod inquiries;

pub use inquiries::{InquiryError, InquiryService, StoreAction, Submission};
