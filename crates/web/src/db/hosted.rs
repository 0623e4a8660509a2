//! Hosted inquiry table behind a PostgREST-compatible HTTP API (Supabase).
//!
//! Rows live at `{project_url}/rest/v1/{table}`. Filters use PostgREST syntax
//! (`id=eq.<uuid>`, `order=created_at.desc`).

use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use url::Url;

use rocketcall_core::{Inquiry, InquiryId, InquiryStatus, NewInquiry};

use super::RepositoryError;
use crate::config::HostedStoreConfig;

/// Longest remote error body kept in [`RepositoryError::Remote`].
const MAX_ERROR_BODY: usize = 512;

/// Client for the hosted inquiry table.
#[derive(Clone)]
pub struct HostedInquiryStore {
    client: Client,
    endpoint: Url,
    api_key: SecretString,
}

impl std::fmt::Debug for HostedInquiryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedInquiryStore")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// Row shape returned by the table API. `message` may be `null`.
#[derive(Debug, Deserialize)]
struct HostedRow {
    id: InquiryId,
    name: String,
    phone: String,
    message: Option<String>,
    status: InquiryStatus,
    created_at: DateTime<Utc>,
}

impl From<HostedRow> for Inquiry {
    fn from(row: HostedRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            phone: row.phone,
            message: row.message.unwrap_or_default(),
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[derive(Serialize)]
struct InsertBody<'a> {
    name: &'a str,
    phone: &'a str,
    message: &'a str,
    status: InquiryStatus,
}

#[derive(Serialize)]
struct StatusBody {
    status: InquiryStatus,
}

impl HostedInquiryStore {
    /// Create a client for the configured project and table.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &HostedStoreConfig) -> Result<Self, RepositoryError> {
        let client = Client::builder()
            .user_agent(concat!("rocketcall/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut endpoint = config.project_url.clone();
        if let Ok(mut segments) = endpoint.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["rest", "v1", config.table.as_str()]);
        }

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    /// # Errors
    ///
    /// Returns `RepositoryError` on transport failure, a non-2xx answer, or an
    /// empty representation.
    #[instrument(skip(self, new))]
    pub async fn insert(&self, new: &NewInquiry) -> Result<Inquiry, RepositoryError> {
        let body = InsertBody {
            name: new.name(),
            phone: new.phone(),
            message: new.message(),
            status: new.status(),
        };

        let response = self
            .authorized(self.client.post(self.endpoint.clone()))
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await?;

        let rows = read_rows(check_status(response).await?).await?;
        rows.into_iter()
            .next()
            .map(Inquiry::from)
            .ok_or_else(|| RepositoryError::DataCorruption("insert returned no row".to_string()))
    }

    /// # Errors
    ///
    /// Returns `RepositoryError` on transport failure, a non-2xx answer, or
    /// rows that do not decode.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Inquiry>, RepositoryError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "created_at.desc");

        let response = self.authorized(self.client.get(url)).send().await?;
        let rows = read_rows(check_status(response).await?).await?;
        Ok(rows.into_iter().map(Inquiry::from).collect())
    }

    /// # Errors
    ///
    /// Returns `RepositoryError` on transport failure or a non-2xx answer.
    #[instrument(skip(self), fields(inquiry_id = %id))]
    pub async fn update_status(
        &self,
        id: InquiryId,
        status: InquiryStatus,
    ) -> Result<(), RepositoryError> {
        let response = self
            .authorized(self.client.patch(self.row_url(id)))
            .header("Prefer", "return=minimal")
            .json(&StatusBody { status })
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `RepositoryError` on transport failure or a non-2xx answer.
    #[instrument(skip(self), fields(inquiry_id = %id))]
    pub async fn delete(&self, id: InquiryId) -> Result<(), RepositoryError> {
        let response = self
            .authorized(self.client.delete(self.row_url(id)))
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `RepositoryError` if the table API does not answer with 2xx.
    pub async fn ping(&self) -> Result<(), RepositoryError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("select", "id")
            .append_pair("limit", "1");

        let response = self.authorized(self.client.get(url)).send().await?;
        check_status(response).await?;
        Ok(())
    }

    fn row_url(&self, id: InquiryId) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("id", &format!("eq.{id}"));
        url
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let key = self.api_key.expose_secret();
        request.header("apikey", key).bearer_auth(key)
    }
}

async fn check_status(response: Response) -> Result<Response, RepositoryError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let mut message = response.text().await.unwrap_or_default();
    if message.len() > MAX_ERROR_BODY {
        let cut = (0..=MAX_ERROR_BODY)
            .rev()
            .find(|&i| message.is_char_boundary(i))
            .unwrap_or(0);
        message.truncate(cut);
    }

    Err(RepositoryError::Remote {
        status: status.as_u16(),
        message,
    })
}

async fn read_rows(response: Response) -> Result<Vec<HostedRow>, RepositoryError> {
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| RepositoryError::DataCorruption(format!("unexpected row shape: {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const ID: &str = "6f1c3a52-8e0b-4d7e-9a55-0c1f2b7e4d11";

    fn store_for(server: &MockServer) -> HostedInquiryStore {
        HostedInquiryStore::new(&HostedStoreConfig {
            project_url: Url::parse(&server.uri()).unwrap(),
            api_key: SecretString::from("anon-key"),
            table: "inquiries".to_string(),
        })
        .unwrap()
    }

    fn row(message: serde_json::Value) -> serde_json::Value {
        json!({
            "id": ID,
            "name": "Kim",
            "phone": "010-1234-5678",
            "message": message,
            "status": "pending",
            "created_at": "2026-03-01T09:30:00.123456+00:00"
        })
    }

    #[tokio::test]
    async fn test_insert_posts_pending_row() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/inquiries"))
            .and(header("apikey", "anon-key"))
            .and(header("authorization", "Bearer anon-key"))
            .and(header("prefer", "return=representation"))
            .and(body_json(json!({
                "name": "Kim",
                "phone": "010-1234-5678",
                "message": "",
                "status": "pending"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([row(json!(""))])))
            .expect(1)
            .mount(&server)
            .await;

        let new = NewInquiry::parse(Some("Kim"), Some("010-1234-5678"), Some("")).unwrap();
        let inquiry = store_for(&server).insert(&new).await.unwrap();

        assert_eq!(inquiry.id.to_string(), ID);
        assert_eq!(inquiry.status, InquiryStatus::Pending);
    }

    #[tokio::test]
    async fn test_list_orders_and_maps_null_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/inquiries"))
            .and(query_param("select", "*"))
            .and(query_param("order", "created_at.desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([row(json!(null))])))
            .expect(1)
            .mount(&server)
            .await;

        let rows = store_for(&server).list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].message, "");
    }

    #[tokio::test]
    async fn test_update_status_filters_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/rest/v1/inquiries"))
            .and(query_param("id", format!("eq.{ID}")))
            .and(body_json(json!({ "status": "contacted" })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        store_for(&server)
            .update_status(ID.parse().unwrap(), InquiryStatus::Contacted)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_filters_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/rest/v1/inquiries"))
            .and(query_param("id", format!("eq.{ID}")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        store_for(&server).delete(ID.parse().unwrap()).await.unwrap();
    }

    #[tokio::test]
    async fn test_remote_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&server)
            .await;

        let err = store_for(&server).list().await.unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::Remote { status: 401, ref message } if message == "Invalid API key"
        ));
    }

    #[tokio::test]
    async fn test_unknown_status_is_data_corruption() {
        let server = MockServer::start().await;
        let mut bad = row(json!("hi"));
        bad["status"] = json!("archived");
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([bad])))
            .mount(&server)
            .await;

        let err = store_for(&server).list().await.unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let store = HostedInquiryStore::new(&HostedStoreConfig {
            project_url: Url::parse("https://abcd.supabase.co").unwrap(),
            api_key: SecretString::from("very-secret-key"),
            table: "inquiries".to_string(),
        })
        .unwrap();

        let debug = format!("{store:?}");
        assert!(!debug.contains("very-secret-key"));
        assert!(debug.contains("https://abcd.supabase.co/rest/v1/inquiries"));
    }
}
