//! Webhook client.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

use super::error::NotifyError;
use super::messages::{InquiryNotice, build_inquiry_message};
use crate::config::NotifierConfig;

/// Longest response body kept in [`NotifyError::Status`].
const MAX_ERROR_BODY: usize = 256;

/// Posts inquiry notifications to a chat webhook.
///
/// Cheap to clone. With no URL configured every send is skipped.
#[derive(Clone)]
pub struct WebhookNotifier {
    client: Client,
    webhook_url: Option<SecretString>,
    site_name: String,
}

impl std::fmt::Debug for WebhookNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookNotifier")
            .field("webhook_url", &self.webhook_url.as_ref().map(|_| "[REDACTED]"))
            .field("site_name", &self.site_name)
            .finish_non_exhaustive()
    }
}

impl WebhookNotifier {
    /// Create a notifier with a request timeout from `config`.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::Request` if the HTTP client cannot be built.
    pub fn new(config: &NotifierConfig) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("rocketcall/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            webhook_url: config.webhook_url.clone(),
            site_name: config.site_name.clone(),
        })
    }

    /// Whether a webhook URL is configured.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Post the notification and wait for the answer.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::NotConfigured` without a URL, `Request` on
    /// transport failure or timeout, and `Status` on a non-2xx answer.
    #[instrument(skip_all)]
    pub async fn send(&self, notice: &InquiryNotice) -> Result<(), NotifyError> {
        let url = self.webhook_url.as_ref().ok_or(NotifyError::NotConfigured)?;
        let payload = build_inquiry_message(notice, &self.site_name);

        let response = self
            .client
            .post(url.expose_secret())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|&i| body.is_char_boundary(i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "Inquiry notification delivered");
        Ok(())
    }

    /// Send on a detached task. Failures are logged, never returned.
    ///
    /// Returns `None` when no URL is configured.
    pub fn spawn_notice(&self, notice: InquiryNotice) -> Option<JoinHandle<()>> {
        if !self.is_enabled() {
            debug!("Webhook URL not configured, skipping inquiry notification");
            return None;
        }

        let notifier = self.clone();
        Some(tokio::spawn(async move {
            if let Err(e) = notifier.send(&notice).await {
                warn!(error = %e, "Failed to send inquiry notification");
            }
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn notice() -> InquiryNotice {
        InquiryNotice {
            name: "Kim".to_string(),
            phone: "010-1234-5678".to_string(),
            message: String::new(),
            submitted_at: "2026-03-01T00:00:00Z".parse().unwrap(),
        }
    }

    fn notifier(url: Option<String>) -> WebhookNotifier {
        WebhookNotifier::new(&NotifierConfig {
            webhook_url: url.map(SecretString::from),
            timeout: Duration::from_secs(2),
            site_name: "로켓콜-자동차".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_send_posts_one_embed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/webhooks/1/token"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = notifier(Some(format!("{}/api/webhooks/1/token", server.uri())));
        notifier.send(&notice()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["embeds"].as_array().unwrap().len(), 1);
        assert_eq!(body["embeds"][0]["fields"][2]["value"], "(내용 없음)");
    }

    #[tokio::test]
    async fn test_send_reports_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = notifier(Some(server.uri())).send(&notice()).await.unwrap_err();
        assert!(matches!(err, NotifyError::Status { status: 500, ref body } if body == "boom"));
    }

    #[tokio::test]
    async fn test_send_without_url() {
        let err = notifier(None).send(&notice()).await.unwrap_err();
        assert!(matches!(err, NotifyError::NotConfigured));
    }

    #[tokio::test]
    async fn test_spawn_notice_skips_when_disabled() {
        assert!(notifier(None).spawn_notice(notice()).is_none());
    }

    #[tokio::test]
    async fn test_spawn_notice_swallows_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let handle = notifier(Some(server.uri())).spawn_notice(notice()).unwrap();
        handle.await.unwrap();
    }

    #[test]
    fn test_debug_redacts_url() {
        let debug = format!(
            "{:?}",
            notifier(Some("https://discord.com/api/webhooks/1/secret-token".to_string()))
        );
        assert!(!debug.contains("secret-token"));
    }
}
