//! RocketCall web server.
//!
//! Serves the marketing page, the inquiry API and the admin panel on
//! `ROCKETCALL_HOST:ROCKETCALL_PORT` (default 127.0.0.1:3000).
//!
//! # Storage
//!
//! `ROCKETCALL_STORE` selects `PostgreSQL` (default), the hosted table API,
//! or an in-memory table. Admin sessions follow: `PostgreSQL` sessions with
//! the `postgres` store, in-memory sessions otherwise.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rocketcall_web::config::{LogFormat, WebConfig};
use rocketcall_web::db::InquiryStore;
use rocketcall_web::middleware::{create_session_layer, postgres_session_store};
use rocketcall_web::notify::WebhookNotifier;
use rocketcall_web::services::InquiryService;
use rocketcall_web::state::AppState;
use sentry::integrations::tracing as sentry_tracing;
use tower_sessions::MemoryStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &WebConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = WebConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rocketcall_web=info,tower_http=debug".into());

    let is_json = config.log_format == LogFormat::Json;
    let json_layer = is_json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!is_json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let store = InquiryStore::connect(&config.store)
        .await
        .expect("Failed to connect to inquiry store");
    tracing::info!(store = store.kind(), "Inquiry store ready");

    // NOTE: Migrations are NOT run automatically on startup.
    // Run them explicitly via: cargo run -p rocketcall-cli -- migrate

    let notifier = WebhookNotifier::new(&config.notifier).expect("Failed to build webhook client");
    if !notifier.is_enabled() {
        tracing::info!("DISCORD_WEBHOOK_URL not set, inquiry notifications disabled");
    }

    let secure = config.is_secure();
    let addr = config.socket_addr();
    let pool = store.pg_pool().cloned();
    let state = AppState::new(config, InquiryService::new(store, notifier));

    let app = match pool {
        Some(pool) => rocketcall_web::app(
            state,
            create_session_layer(postgres_session_store(&pool), secure),
        ),
        None => rocketcall_web::app(state, create_session_layer(MemoryStore::default(), secure)),
    };

    tracing::info!("rocketcall listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
