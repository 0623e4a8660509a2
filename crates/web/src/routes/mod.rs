//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                - Marketing page
//! POST /                                - Contact form (no-JS fallback)
//!
//! # Inquiry API (JSON)
//! POST   /inquiry                       - Submit an inquiry (public)
//! GET    /inquiry                       - List inquiries (admin)
//! PATCH  /inquiry/{id}                  - Change status (admin)
//! DELETE /inquiry/{id}                  - Delete (admin)
//!
//! # Admin panel (HTML)
//! GET  /admin?tab=...                   - Dashboard
//! GET  /admin/login                     - Login page
//! POST /admin/login                     - Login action
//! POST /admin/logout                    - Logout action
//! POST /admin/inquiries/{id}/status     - Change status (form)
//! POST /admin/inquiries/{id}/delete     - Delete (form)
//! ```

pub mod admin;
pub mod api;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the admin panel router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::dashboard))
        .route("/login", get(admin::login_page).post(admin::login))
        .route("/logout", post(admin::logout))
        .route("/inquiries/{id}/status", post(admin::update_status))
        .route("/inquiries/{id}/delete", post(admin::delete))
}

/// Create all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home).post(home::submit))
        .merge(api::inquiry_routes())
        .nest("/admin", admin_routes())
}
