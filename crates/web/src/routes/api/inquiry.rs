//! Inquiry JSON endpoints.
//!
//! `POST /inquiry` is public; listing, status changes and deletion require
//! an admin session or bearer secret.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use rocketcall_core::{Inquiry, InquiryId};

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Intake body. Unknown fields (including `status`) are ignored.
#[derive(Debug, Deserialize)]
pub struct InquiryForm {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: InquiryId,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Submit a new inquiry.
///
/// POST /inquiry
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<InquiryForm>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let Json(form) = payload?;

    let submission = state
        .inquiries()
        .submit(
            form.name.as_deref(),
            form.phone.as_deref(),
            form.message.as_deref(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "상담 신청이 완료되었습니다.",
            id: submission.inquiry.id,
        }),
    ))
}

/// List all inquiries, newest first.
///
/// GET /inquiry
#[instrument(skip_all)]
pub async fn list(_: RequireAdmin, State(state): State<AppState>) -> Result<Json<Vec<Inquiry>>> {
    Ok(Json(state.inquiries().list().await?))
}

/// Change an inquiry's status.
///
/// PATCH /inquiry/{id}
#[instrument(skip(state, payload))]
pub async fn update_status(
    _: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<StatusForm>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let id: InquiryId = id.parse()?;
    let Json(form) = payload?;

    state
        .inquiries()
        .update_status(id, form.status.as_deref())
        .await?;

    Ok(Json(MessageResponse {
        message: "상태가 업데이트되었습니다.",
    }))
}

/// Delete an inquiry.
///
/// DELETE /inquiry/{id}
#[instrument(skip(state))]
pub async fn delete(
    _: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id: InquiryId = id.parse()?;
    state.inquiries().delete(id).await?;

    Ok(Json(MessageResponse {
        message: "문의가 삭제되었습니다.",
    }))
}
