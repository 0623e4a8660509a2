//! Session middleware configuration.
//!
//! The admin login flag lives in a `tower-sessions` session. Deployments on
//! `PostgreSQL` keep sessions in the same database; the other backends use
//! the in-process `MemoryStore`.

use sqlx::PgPool;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};
use tower_sessions_sqlx_store::PostgresStore;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "rc_admin_session";

/// Session expiry after 12 hours of inactivity.
const SESSION_EXPIRY_SECONDS: i64 = 12 * 60 * 60;

/// `PostgreSQL` session store (table created by `rc-cli migrate`).
#[must_use]
pub fn postgres_session_store(pool: &PgPool) -> PostgresStore {
    PostgresStore::new(pool.clone())
}

/// Create the session layer over `store`.
///
/// Cookies are `HttpOnly`, `SameSite=Strict`, and `Secure` when `secure`.
#[must_use]
pub fn create_session_layer<S>(store: S, secure: bool) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(secure)
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
