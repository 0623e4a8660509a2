//! Integration test harness for RocketCall.
//!
//! [`TestApp::spawn`] serves the full router on an ephemeral port with the
//! in-memory inquiry table and in-memory sessions, so no database is needed.
//!
//! ```bash
//! cargo test -p rocketcall-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use std::time::Duration;

use reqwest::{Client, Response, redirect::Policy};
use rocketcall_web::config::WebConfig;
use rocketcall_web::db::MemoryInquiryStore;
use rocketcall_web::middleware::create_session_layer;
use rocketcall_web::notify::WebhookNotifier;
use rocketcall_web::services::InquiryService;
use rocketcall_web::state::AppState;
use serde_json::Value;
use tower_sessions::MemoryStore;
use wiremock::{Mock, MockServer, ResponseTemplate, matchers::method};

/// Admin secret used by every spawned app.
pub const ADMIN_SECRET: &str = "dealer-desk-7731";

/// Path the webhook mock listens on.
pub const WEBHOOK_PATH: &str = "/api/webhooks/1/token";

/// A running app plus a cookie-keeping client pointed at it.
pub struct TestApp {
    pub base_url: String,
    pub client: Client,
    pub rows: MemoryInquiryStore,
}

impl TestApp {
    /// Serve the app without a webhook.
    pub async fn spawn() -> Self {
        Self::spawn_with(None).await
    }

    /// Serve the app, posting notifications to `webhook` when given.
    pub async fn spawn_with(webhook: Option<&MockServer>) -> Self {
        let webhook_url = webhook.map(|server| format!("{}{WEBHOOK_PATH}", server.uri()));
        let vars = move |key: &str| match key {
            "ADMIN_PASSWORD" => Some(ADMIN_SECRET.to_string()),
            "ROCKETCALL_STORE" => Some("memory".to_string()),
            "DISCORD_WEBHOOK_URL" => webhook_url.clone(),
            _ => None,
        };
        let config = WebConfig::from_vars(&vars).unwrap();

        let rows = MemoryInquiryStore::new();
        let notifier = WebhookNotifier::new(&config.notifier).unwrap();
        let state = AppState::new(config, InquiryService::new(rows.clone().into(), notifier));
        let app = rocketcall_web::app(
            state,
            create_session_layer(MemoryStore::default(), false),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .unwrap();

        Self {
            base_url: format!("http://{addr}"),
            client,
            rows,
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /inquiry` with a JSON body.
    pub async fn submit(&self, body: &Value) -> Response {
        self.client
            .post(self.url("/inquiry"))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    /// `POST /admin/login` with a form-encoded password.
    pub async fn login(&self, password: &str) -> Response {
        self.post_form("/admin/login", &format!("password={password}"))
            .await
    }

    /// POST an already-encoded `application/x-www-form-urlencoded` body.
    pub async fn post_form(&self, path: &str, body: &str) -> Response {
        self.client
            .post(self.url(path))
            .header("content-type", "application/x-www-form-urlencoded")
            .body(body.to_string())
            .send()
            .await
            .unwrap()
    }

    /// `GET /inquiry` as JSON.
    pub async fn list(&self) -> Response {
        self.client.get(self.url("/inquiry")).send().await.unwrap()
    }
}

/// Start a webhook mock that accepts every POST with 204.
pub async fn webhook_accepting() -> MockServer {
    webhook_answering(204).await
}

/// Start a webhook mock that answers every POST with `status`.
pub async fn webhook_answering(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

/// Wait until the mock has seen `count` requests, or give up after two seconds.
pub async fn wait_for_requests(server: &MockServer, count: usize) -> Vec<wiremock::Request> {
    for _ in 0..40 {
        let received = server.received_requests().await.unwrap_or_default();
        if received.len() >= count {
            return received;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    server.received_requests().await.unwrap_or_default()
}
