//! Inquiry intake and administration.
//!
//! Intake validates the form, inserts a `pending` row and hands the new row to
//! the webhook notifier on a detached task. The admin operations are thin
//! wrappers over the store that tag failures with the action that failed.

mod error;

use tokio::task::JoinHandle;
use tracing::{info, instrument};

use rocketcall_core::{Inquiry, InquiryId, InquiryStatus, NewInquiry};

use crate::db::InquiryStore;
use crate::notify::{InquiryNotice, WebhookNotifier};

pub use error::{InquiryError, StoreAction};

/// Result of a successful intake.
#[derive(Debug)]
pub struct Submission {
    pub inquiry: Inquiry,
    /// Notification task, if a webhook is configured. Dropping it does not
    /// cancel the send.
    pub notification: Option<JoinHandle<()>>,
}

/// Inquiry operations over the configured store and notifier.
#[derive(Debug, Clone)]
pub struct InquiryService {
    store: InquiryStore,
    notifier: WebhookNotifier,
}

impl InquiryService {
    #[must_use]
    pub const fn new(store: InquiryStore, notifier: WebhookNotifier) -> Self {
        Self { store, notifier }
    }

    #[must_use]
    pub const fn store(&self) -> &InquiryStore {
        &self.store
    }

    #[must_use]
    pub const fn notifier(&self) -> &WebhookNotifier {
        &self.notifier
    }

    /// Validate and record a new inquiry, then notify.
    ///
    /// The stored status is always `pending`. A notification failure never
    /// fails the submission.
    ///
    /// # Errors
    ///
    /// Returns `InquiryError::Validation` if `name` or `phone` is blank, and
    /// `InquiryError::Storage` if the insert fails.
    #[instrument(skip_all)]
    pub async fn submit(
        &self,
        name: Option<&str>,
        phone: Option<&str>,
        message: Option<&str>,
    ) -> Result<Submission, InquiryError> {
        let new = NewInquiry::parse(name, phone, message)?;

        let inquiry = self
            .store
            .insert(&new)
            .await
            .map_err(InquiryError::storage(StoreAction::Insert))?;

        info!(inquiry_id = %inquiry.id, "Inquiry received");

        let notification = self.notifier.spawn_notice(InquiryNotice::from(&inquiry));
        Ok(Submission {
            inquiry,
            notification,
        })
    }

    /// All inquiries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `InquiryError::Storage` if the read fails.
    #[instrument(skip_all)]
    pub async fn list(&self) -> Result<Vec<Inquiry>, InquiryError> {
        self.store
            .list()
            .await
            .map_err(InquiryError::storage(StoreAction::List))
    }

    /// Set the status of `id` from a raw client value.
    ///
    /// Any transition between the three states is allowed. An unknown `id`
    /// is not an error.
    ///
    /// # Errors
    ///
    /// Returns `InquiryError::Validation` if `status` is absent or not one of
    /// `pending`, `contacted`, `completed`, and `InquiryError::Storage` if the
    /// write fails.
    #[instrument(skip(self), fields(inquiry_id = %id))]
    pub async fn update_status(
        &self,
        id: InquiryId,
        status: Option<&str>,
    ) -> Result<InquiryStatus, InquiryError> {
        let status: InquiryStatus = status.unwrap_or_default().parse()?;

        self.store
            .update_status(id, status)
            .await
            .map_err(InquiryError::storage(StoreAction::Update))?;

        info!(%status, "Inquiry status updated");
        Ok(status)
    }

    /// Delete `id`. An unknown `id` is not an error.
    ///
    /// # Errors
    ///
    /// Returns `InquiryError::Storage` if the write fails.
    #[instrument(skip(self), fields(inquiry_id = %id))]
    pub async fn delete(&self, id: InquiryId) -> Result<(), InquiryError> {
        self.store
            .delete(id)
            .await
            .map_err(InquiryError::storage(StoreAction::Delete))?;

        info!("Inquiry deleted");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::time::Duration;

    use secrecy::SecretString;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use rocketcall_core::ValidationError;

    use super::*;
    use crate::config::NotifierConfig;
    use crate::db::MemoryInquiryStore;

    fn service(webhook_url: Option<String>) -> (InquiryService, MemoryInquiryStore) {
        let rows = MemoryInquiryStore::new();
        let notifier = WebhookNotifier::new(&NotifierConfig {
            webhook_url: webhook_url.map(SecretString::from),
            timeout: Duration::from_secs(2),
            site_name: "로켓콜-자동차".to_string(),
        })
        .unwrap();
        (InquiryService::new(rows.clone().into(), notifier), rows)
    }

    #[tokio::test]
    async fn test_submit_missing_fields_creates_nothing() {
        let (service, rows) = service(None);

        let err = service.submit(Some("Kim"), Some("  "), None).await.unwrap_err();
        assert!(matches!(
            err,
            InquiryError::Validation(ValidationError::MissingField("phone"))
        ));
        assert!(rows.is_empty().await);
    }

    #[tokio::test]
    async fn test_submit_stores_pending_without_webhook() {
        let (service, rows) = service(None);

        let submission = service
            .submit(Some("Kim"), Some("010-1234-5678"), Some(""))
            .await
            .unwrap();

        assert!(submission.notification.is_none());
        assert_eq!(submission.inquiry.status, InquiryStatus::Pending);
        assert_eq!(rows.list().await, vec![submission.inquiry]);
    }

    #[tokio::test]
    async fn test_submit_notifies_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let (service, _) = service(Some(server.uri()));
        let submission = service
            .submit(Some("Kim"), Some("010"), Some("hello"))
            .await
            .unwrap();
        submission.notification.unwrap().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["embeds"][0]["fields"][2]["value"], "hello");
    }

    #[tokio::test]
    async fn test_submit_succeeds_when_webhook_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (service, rows) = service(Some(server.uri()));
        let submission = service.submit(Some("Kim"), Some("010"), None).await.unwrap();
        submission.notification.unwrap().await.unwrap();

        assert_eq!(rows.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_status_validates_value() {
        let (service, rows) = service(None);
        let created = service.submit(Some("Kim"), Some("010"), None).await.unwrap();

        for bad in [None, Some(""), Some("archived"), Some("Pending")] {
            let err = service.update_status(created.inquiry.id, bad).await.unwrap_err();
            assert!(matches!(
                err,
                InquiryError::Validation(ValidationError::InvalidStatus(_))
            ));
        }
        assert_eq!(rows.list().await[0].status, InquiryStatus::Pending);

        for status in ["contacted", "completed", "pending"] {
            service
                .update_status(created.inquiry.id, Some(status))
                .await
                .unwrap();
            assert_eq!(rows.list().await[0].status.as_str(), status);
        }
    }

    #[tokio::test]
    async fn test_delete_unknown_id_succeeds() {
        let (service, rows) = service(None);
        service.submit(Some("Kim"), Some("010"), None).await.unwrap();

        service.delete(InquiryId::generate()).await.unwrap();
        assert_eq!(rows.len().await, 1);
    }
}
