//! Admin authentication extractor and session helpers.
//!
//! A request is an admin request when its session carries an
//! [`AdminSession`] (set by `POST /admin/login`) or when it sends
//! `Authorization: Bearer <ADMIN_PASSWORD>`.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::{AdminSession, session_keys};
use crate::state::AppState;

/// Where unauthenticated HTML requests are sent.
pub const LOGIN_PATH: &str = "/admin/login";

/// Extractor that requires admin authentication.
///
/// Rejects JSON API requests (`/inquiry...`) with 401 and redirects
/// everything else to the login page.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

/// Rejection for [`RequireAdmin`].
#[derive(Debug)]
pub enum AdminAuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// `401` JSON error (for API requests).
    Unauthorized,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
            Self::Unauthorized => AppError::Unauthorized.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if bearer_matches(parts, state.admin_secret()) {
            return Ok(Self);
        }

        let logged_in = match parts.extensions.get::<Session>() {
            Some(session) => is_admin(session).await,
            None => false,
        };

        if logged_in {
            Ok(Self)
        } else if parts.uri.path().starts_with("/inquiry") {
            Err(AdminAuthRejection::Unauthorized)
        } else {
            Err(AdminAuthRejection::RedirectToLogin)
        }
    }
}

/// Whether the session holds an admin login younger than
/// [`ADMIN_LOGIN_MAX_AGE`](crate::models::session::ADMIN_LOGIN_MAX_AGE).
pub async fn is_admin(session: &Session) -> bool {
    session
        .get::<AdminSession>(session_keys::ADMIN)
        .await
        .ok()
        .flatten()
        .is_some_and(|login| login.is_current(Utc::now()))
}

/// Check a submitted secret against the configured one.
#[must_use]
pub fn verify_admin_secret(candidate: &str, secret: &SecretString) -> bool {
    constant_time_compare(candidate, secret.expose_secret())
}

/// Mark the session as admin, issuing a fresh session ID.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_admin_session(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(session_keys::ADMIN, AdminSession::now()).await
}

/// Drop the whole session (logout).
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn clear_admin_session(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}

fn bearer_matches(parts: &Parts, secret: &SecretString) -> bool {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| verify_admin_secret(token.trim(), secret))
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }

    result == 0
}
