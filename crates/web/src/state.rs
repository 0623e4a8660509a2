//! Application state shared across handlers.

use std::sync::Arc;

use secrecy::SecretString;

use crate::config::WebConfig;
use crate::services::InquiryService;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    inquiries: InquiryService,
}

impl AppState {
    #[must_use]
    pub fn new(config: WebConfig, inquiries: InquiryService) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, inquiries }),
        }
    }

    /// Get a reference to the web configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the inquiry service.
    #[must_use]
    pub fn inquiries(&self) -> &InquiryService {
        &self.inner.inquiries
    }

    /// Shared admin secret.
    #[must_use]
    pub fn admin_secret(&self) -> &SecretString {
        &self.inner.config.admin_secret
    }
}
