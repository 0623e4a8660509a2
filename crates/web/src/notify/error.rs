//! Notification errors.

use thiserror::Error;

/// Errors that can occur when posting to the webhook.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// HTTP request failed (connect, timeout, body).
    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Webhook answered with a non-2xx status.
    #[error("webhook returned {status}: {body}")]
    Status { status: u16, body: String },

    /// No webhook URL is configured.
    #[error("webhook URL is not configured")]
    NotConfigured,
}
