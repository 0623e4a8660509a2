//! Admin panel: login, inquiry dashboard, and form actions.
//!
//! The dashboard is server-rendered; status changes and deletes are plain
//! form posts that redirect back to the tab they came from.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use rocketcall_core::{Inquiry, InquiryId, InquiryStatus, StatusFilter};

use crate::error::Result;
use crate::middleware::{
    RequireAdmin, clear_admin_session, is_admin, set_admin_session, verify_admin_secret,
};
use crate::notify::format_kst;
use crate::services::InquiryError;
use crate::state::AppState;

const WRONG_PASSWORD: &str = "비밀번호가 올바르지 않습니다.";

// =============================================================================
// Form Types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub tab: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusChangeForm {
    pub status: Option<String>,
    pub tab: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub tab: Option<String>,
}

// =============================================================================
// View Models
// =============================================================================

/// A dashboard tab link.
pub struct TabView {
    pub value: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// A status `<option>`.
pub struct StatusOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// One table row.
pub struct InquiryRow {
    pub id: String,
    pub submitted_at: String,
    pub name: String,
    pub phone: String,
    pub message: String,
    pub status: &'static str,
}

impl From<&Inquiry> for InquiryRow {
    fn from(inquiry: &Inquiry) -> Self {
        Self {
            id: inquiry.id.to_string(),
            submitted_at: format_kst(inquiry.created_at),
            name: inquiry.name.clone(),
            phone: inquiry.phone.clone(),
            message: if inquiry.message.is_empty() {
                "-".to_string()
            } else {
                inquiry.message.clone()
            },
            status: inquiry.status.as_str(),
        }
    }
}

/// Counters above the tabs.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub pending: usize,
    pub contacted: usize,
    pub completed: usize,
}

impl Counts {
    fn of(inquiries: &[Inquiry]) -> Self {
        inquiries.iter().fold(Self::default(), |mut counts, inquiry| {
            counts.total += 1;
            match inquiry.status {
                InquiryStatus::Pending => counts.pending += 1,
                InquiryStatus::Contacted => counts.contacted += 1,
                InquiryStatus::Completed => counts.completed += 1,
            }
            counts
        })
    }
}

// =============================================================================
// Templates
// =============================================================================

#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub error: Option<&'static str>,
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub counts: Counts,
    pub tab: &'static str,
    pub tabs: Vec<TabView>,
    pub status_options: Vec<StatusOption>,
    pub rows: Vec<InquiryRow>,
    pub empty_message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login page, or go straight to the dashboard when logged in.
///
/// GET /admin/login
pub async fn login_page(session: Session) -> Response {
    if is_admin(&session).await {
        return Redirect::to("/admin").into_response();
    }
    LoginTemplate { error: None }.into_response()
}

/// Check the shared secret and start an admin session.
///
/// POST /admin/login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    if !verify_admin_secret(&form.password, state.admin_secret()) {
        tracing::warn!("Admin login rejected");
        return Ok((
            StatusCode::UNAUTHORIZED,
            LoginTemplate {
                error: Some(WRONG_PASSWORD),
            },
        )
            .into_response());
    }

    set_admin_session(&session).await?;
    tracing::info!("Admin logged in");
    Ok(Redirect::to("/admin").into_response())
}

/// End the admin session.
///
/// POST /admin/logout
pub async fn logout(session: Session) -> Redirect {
    if let Err(e) = clear_admin_session(&session).await {
        tracing::error!(error = %e, "Failed to clear admin session");
    }
    Redirect::to("/admin/login")
}

/// Inquiry dashboard.
///
/// GET /admin?tab=all|pending|contacted|completed
pub async fn dashboard(
    _: RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<DashboardTemplate> {
    let filter = StatusFilter::from_query(query.tab.as_deref());
    let inquiries = state.inquiries().list().await?;

    let rows: Vec<InquiryRow> = inquiries
        .iter()
        .filter(|inquiry| filter.matches(inquiry.status))
        .map(InquiryRow::from)
        .collect();

    let empty_message = match filter {
        StatusFilter::All => "아직 문의가 없습니다.".to_string(),
        StatusFilter::Only(status) => format!("{} 상태의 문의가 없습니다.", status.label()),
    };

    Ok(DashboardTemplate {
        counts: Counts::of(&inquiries),
        tab: filter.as_str(),
        tabs: StatusFilter::TABS
            .iter()
            .map(|&tab| TabView {
                value: tab.as_str(),
                label: tab.label(),
                active: tab == filter,
            })
            .collect(),
        status_options: InquiryStatus::ALL
            .iter()
            .map(|status| StatusOption {
                value: status.as_str(),
                label: status.label(),
            })
            .collect(),
        rows,
        empty_message,
    })
}

/// Change status from the dashboard dropdown.
///
/// POST /admin/inquiries/{id}/status
///
/// A malformed id or status leaves the row untouched and still redirects
/// back to the dashboard.
pub async fn update_status(
    _: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<StatusChangeForm>,
) -> Result<Redirect> {
    let result = match id.parse::<InquiryId>() {
        Ok(id) => state
            .inquiries()
            .update_status(id, form.status.as_deref())
            .await
            .map(drop),
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => {}
        Err(InquiryError::Validation(e)) => {
            tracing::debug!(error = %e, "Dashboard status change ignored");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(back_to_tab(form.tab.as_deref()))
}

/// Delete from the dashboard.
///
/// POST /admin/inquiries/{id}/delete
pub async fn delete(
    _: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Result<Redirect> {
    let id: InquiryId = id.parse()?;
    state.inquiries().delete(id).await?;

    Ok(back_to_tab(form.tab.as_deref()))
}

fn back_to_tab(tab: Option<&str>) -> Redirect {
    let filter = StatusFilter::from_query(tab);
    Redirect::to(&format!("/admin?tab={}", filter.as_str()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn inquiry(status: InquiryStatus, message: &str) -> Inquiry {
        Inquiry {
            id: InquiryId::generate(),
            name: "Kim".to_string(),
            phone: "010-1234-5678".to_string(),
            message: message.to_string(),
            status,
            created_at: "2026-03-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_counts() {
        let rows = [
            inquiry(InquiryStatus::Pending, ""),
            inquiry(InquiryStatus::Pending, ""),
            inquiry(InquiryStatus::Completed, ""),
        ];
        assert_eq!(
            Counts::of(&rows),
            Counts {
                total: 3,
                pending: 2,
                contacted: 0,
                completed: 1,
            }
        );
    }

    #[test]
    fn test_row_formats_time_and_empty_message() {
        let row = InquiryRow::from(&inquiry(InquiryStatus::Contacted, ""));
        assert_eq!(row.message, "-");
        assert_eq!(row.submitted_at, "2026. 03. 01. 오전 09:00:00");
        assert_eq!(row.status, "contacted");
    }
}
