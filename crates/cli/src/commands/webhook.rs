//! Webhook check command.
//!
//! # Environment Variables
//!
//! - `DISCORD_WEBHOOK_URL` - Discord incoming webhook
//! - `SITE_NAME` - Footer text (optional)

use chrono::Utc;
use rocketcall_web::config::{ConfigError, NotifierConfig};
use rocketcall_web::notify::{InquiryNotice, NotifyError, WebhookNotifier};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Notification failed: {0}")]
    Notify(#[from] NotifyError),
}

/// Send one sample notice and fail loudly if Discord rejects it.
pub async fn test() -> Result<(), WebhookError> {
    let notifier = WebhookNotifier::new(&NotifierConfig::from_env()?)?;

    let notice = InquiryNotice {
        name: "테스트".to_string(),
        phone: "010-0000-0000".to_string(),
        message: "rc-cli webhook test".to_string(),
        submitted_at: Utc::now(),
    };

    notifier.send(&notice).await?;
    tracing::info!("Webhook accepted the test notification");
    Ok(())
}
