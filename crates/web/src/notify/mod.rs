//! Chat webhook notifications for new inquiries.
//!
//! This module provides:
//! - [`WebhookNotifier`] for posting to a Discord-style webhook
//! - Embed types for the webhook payload
//! - [`build_inquiry_message`] for the fixed "new inquiry" message
//!
//! # Delivery
//!
//! Intake calls [`WebhookNotifier::spawn_notice`], which posts on a detached
//! task. Failures are logged at `warn` and never reach the submitter. There is
//! no retry; the request is bounded by the configured timeout.

mod client;
mod error;
mod messages;
mod types;

pub use client::WebhookNotifier;
pub use error::NotifyError;
pub use messages::{InquiryNotice, build_inquiry_message, format_kst};
pub use types::{Embed, EmbedField, EmbedFooter, WebhookMessage};
