//! Web configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ADMIN_PASSWORD` - Shared admin secret (min 8 chars, not a common default)
//! - `ROCKETCALL_DATABASE_URL` (or `DATABASE_URL`) - when `ROCKETCALL_STORE=postgres`
//! - `SUPABASE_URL`, `SUPABASE_ANON_KEY` - when `ROCKETCALL_STORE=hosted`
//!
//! ## Optional
//! - `ROCKETCALL_HOST` - Bind address (default: 127.0.0.1)
//! - `ROCKETCALL_PORT` - Listen port (default: 3000)
//! - `ROCKETCALL_BASE_URL` - Public URL (default: <http://localhost:3000>)
//! - `ROCKETCALL_STORE` - `postgres` | `hosted` | `memory` (default: postgres)
//! - `SUPABASE_TABLE` - Hosted table name (default: inquiries)
//! - `DISCORD_WEBHOOK_URL` - Inquiry notification webhook (unset disables notifications)
//! - `NOTIFY_TIMEOUT_SECS` - Webhook request timeout (default: 10)
//! - `SITE_NAME` - Brand shown in notifications (default: 로켓콜-자동차)
//! - `KAKAO_CHANNEL_URL` - KakaoTalk chat link for the floating button
//! - `PROPOSAL_URL` - Proposal document link in the header
//! - `SENTRY_DSN`, `SENTRY_ENVIRONMENT`, `SENTRY_SAMPLE_RATE`, `SENTRY_TRACES_SAMPLE_RATE`
//! - `LOG_FORMAT` - `text` | `json` (default: text)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const MIN_ADMIN_SECRET_LENGTH: usize = 8;
const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SITE_NAME: &str = "로켓콜-자동차";

/// Well-known defaults that must never guard a real admin panel (case-insensitive).
const COMMON_DEFAULT_SECRETS: &[&str] = &[
    "admin123",
    "password",
    "password1",
    "changeme",
    "12345678",
    "qwerty123",
    "rocketcall",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Web application configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Shared secret for the admin panel
    pub admin_secret: SecretString,
    /// Record store backend
    pub store: StoreConfig,
    /// Inquiry notification settings
    pub notifier: NotifierConfig,
    /// Marketing page links
    pub site: SiteConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
    /// Error event sample rate (0.0 - 1.0)
    pub sentry_sample_rate: f32,
    /// Performance trace sample rate (0.0 - 1.0)
    pub sentry_traces_sample_rate: f32,
    /// Log output format
    pub log_format: LogFormat,
}

/// Which record store backs the inquiry table.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// `PostgreSQL` through an `sqlx` pool.
    Postgres { database_url: SecretString },
    /// Hosted table behind a PostgREST-compatible HTTP API.
    Hosted(HostedStoreConfig),
    /// In-process table, lost on restart.
    Memory,
}

/// Hosted table API settings.
#[derive(Debug, Clone)]
pub struct HostedStoreConfig {
    /// Project URL, e.g. `https://abcd.supabase.co`
    pub project_url: Url,
    /// API key sent as `apikey` and bearer token
    pub api_key: SecretString,
    /// Table name
    pub table: String,
}

/// Webhook notification settings.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Webhook URL (carries a token, so it is kept secret). `None` disables sending.
    pub webhook_url: Option<SecretString>,
    /// Request timeout for each webhook post
    pub timeout: Duration,
    /// Brand shown in the message footer
    pub site_name: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout: Duration::from_secs(DEFAULT_NOTIFY_TIMEOUT_SECS),
            site_name: DEFAULT_SITE_NAME.to_string(),
        }
    }
}

/// Optional links rendered on the marketing page.
#[derive(Debug, Clone, Default)]
pub struct SiteConfig {
    /// KakaoTalk channel chat URL for the floating button
    pub kakao_channel_url: Option<String>,
    /// Proposal document URL shown in the header
    pub proposal_url: Option<String>,
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the admin secret fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_vars(&process_env)
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`WebConfig::from_env`].
    pub fn from_vars(vars: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_or_default::<IpAddr>(vars, "ROCKETCALL_HOST", "127.0.0.1")?;
        let port = parse_or_default::<u16>(vars, "ROCKETCALL_PORT", "3000")?;
        let base_url = vars("ROCKETCALL_BASE_URL")
            .unwrap_or_else(|| "http://localhost:3000".to_string());

        let admin_secret = SecretString::from(required(vars, "ADMIN_PASSWORD")?);
        validate_admin_secret(&admin_secret, "ADMIN_PASSWORD")?;

        let log_format = match vars("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "LOG_FORMAT".to_string(),
                    format!("expected text or json, got {other:?}"),
                ));
            }
        };

        Ok(Self {
            host,
            port,
            base_url,
            admin_secret,
            store: StoreConfig::from_vars(vars)?,
            notifier: NotifierConfig::from_vars(vars)?,
            site: SiteConfig {
                kakao_channel_url: non_empty(vars, "KAKAO_CHANNEL_URL"),
                proposal_url: non_empty(vars, "PROPOSAL_URL"),
            },
            sentry_dsn: non_empty(vars, "SENTRY_DSN"),
            sentry_environment: non_empty(vars, "SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_or_default(vars, "SENTRY_SAMPLE_RATE", "1.0")?,
            sentry_traces_sample_rate: parse_or_default(vars, "SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
            log_format,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` flag.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl StoreConfig {
    /// Load only the store settings (used by the CLI).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the selected backend is missing settings.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_vars(&process_env)
    }

    /// The `ROCKETCALL_STORE` value that selects this backend.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Postgres { .. } => "postgres",
            Self::Hosted(_) => "hosted",
            Self::Memory => "memory",
        }
    }

    fn from_vars(vars: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let kind = vars("ROCKETCALL_STORE").unwrap_or_else(|| "postgres".to_string());

        match kind.as_str() {
            "postgres" => {
                // Fallback to generic DATABASE_URL (set by most hosting providers)
                let url = vars("ROCKETCALL_DATABASE_URL")
                    .or_else(|| vars("DATABASE_URL"))
                    .ok_or_else(|| {
                        ConfigError::MissingEnvVar("ROCKETCALL_DATABASE_URL".to_string())
                    })?;
                Ok(Self::Postgres {
                    database_url: SecretString::from(url),
                })
            }
            "hosted" => {
                let raw = required(vars, "SUPABASE_URL")?;
                let project_url = Url::parse(&raw).map_err(|e| {
                    ConfigError::InvalidEnvVar("SUPABASE_URL".to_string(), e.to_string())
                })?;
                Ok(Self::Hosted(HostedStoreConfig {
                    project_url,
                    api_key: SecretString::from(required(vars, "SUPABASE_ANON_KEY")?),
                    table: vars("SUPABASE_TABLE").unwrap_or_else(|| "inquiries".to_string()),
                }))
            }
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidEnvVar(
                "ROCKETCALL_STORE".to_string(),
                format!("expected postgres, hosted or memory, got {other:?}"),
            )),
        }
    }
}

impl NotifierConfig {
    /// Load only the notifier settings (used by the CLI).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_vars(&process_env)
    }

    fn from_vars(vars: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let webhook_url = match non_empty(vars, "DISCORD_WEBHOOK_URL") {
            Some(raw) => {
                Url::parse(&raw).map_err(|e| {
                    ConfigError::InvalidEnvVar("DISCORD_WEBHOOK_URL".to_string(), e.to_string())
                })?;
                Some(SecretString::from(raw))
            }
            None => None,
        };
        let timeout_secs = parse_or_default::<u64>(
            vars,
            "NOTIFY_TIMEOUT_SECS",
            &DEFAULT_NOTIFY_TIMEOUT_SECS.to_string(),
        )?;

        Ok(Self {
            webhook_url,
            timeout: Duration::from_secs(timeout_secs),
            site_name: non_empty(vars, "SITE_NAME").unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read from the real process environment.
fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get a required variable.
fn required(vars: &dyn Fn(&str) -> Option<String>, key: &str) -> Result<String, ConfigError> {
    non_empty(vars, key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional variable, treating blank values as unset.
fn non_empty(vars: &dyn Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    vars(key).filter(|v| !v.trim().is_empty())
}

/// Parse a variable, falling back to `default` when unset.
fn parse_or_default<T>(
    vars: &dyn Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    vars(key)
        .unwrap_or_else(|| default.to_string())
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Validate that the admin secret is long enough and not a well-known default.
fn validate_admin_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.chars().count() < MIN_ADMIN_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("must be at least {MIN_ADMIN_SECRET_LENGTH} characters"),
        ));
    }

    let lower = value.to_lowercase();
    if COMMON_DEFAULT_SECRETS.contains(&lower.as_str()) {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            "is a well-known default; choose a unique secret".to_string(),
        ));
    }

    Ok(())
}
