//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers return
//! `Result<T, AppError>`. The response body is always
//! `{"error": "<user-facing message>"}`; internal details stay in the logs.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use rocketcall_core::ValidationError;

use crate::db::RepositoryError;
use crate::services::{InquiryError, StoreAction};

const MSG_MISSING_FIELD: &str = "이름과 전화번호는 필수입니다.";
const MSG_INVALID_STATUS: &str = "유효한 상태값이 필요합니다.";
const MSG_INVALID_ID: &str = "유효하지 않은 문의 ID입니다.";
const MSG_MALFORMED_BODY: &str = "잘못된 요청 형식입니다.";
const MSG_UNAUTHORIZED: &str = "관리자 인증이 필요합니다.";
const MSG_SERVER: &str = "서버 오류가 발생했습니다.";

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client input failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Record store operation failed.
    #[error("Storage error during {action}: {source}")]
    Storage {
        action: StoreAction,
        #[source]
        source: RepositoryError,
    },

    /// Request body could not be decoded.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Admin session or bearer secret missing.
    #[error("Unauthorized")]
    Unauthorized,

    /// Session store failure.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<InquiryError> for AppError {
    fn from(err: InquiryError) -> Self {
        match err {
            InquiryError::Validation(e) => Self::Validation(e),
            InquiryError::Storage { action, source } => Self::Storage { action, source },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl AppError {
    const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Storage { .. } | Self::Session(_) | Self::Internal(_)
        )
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Storage { .. } | Self::Session(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the client.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::MissingField(_)) => MSG_MISSING_FIELD,
            Self::Validation(ValidationError::InvalidStatus(_)) => MSG_INVALID_STATUS,
            Self::Validation(ValidationError::InvalidId(_)) => MSG_INVALID_ID,
            Self::MalformedBody(_) => MSG_MALFORMED_BODY,
            Self::Unauthorized => MSG_UNAUTHORIZED,
            Self::Storage { action, .. } => match action {
                StoreAction::Insert => "데이터 저장 중 오류가 발생했습니다.",
                StoreAction::List => "데이터 조회 중 오류가 발생했습니다.",
                StoreAction::Update => "상태 업데이트 중 오류가 발생했습니다.",
                StoreAction::Delete => "삭제 중 오류가 발생했습니다.",
            },
            Self::Session(_) | Self::Internal(_) => MSG_SERVER,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (self.status(), Json(json!({ "error": self.user_message() }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
