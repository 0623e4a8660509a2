//! JSON API routes.

pub mod inquiry;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

/// Create the inquiry API router.
pub fn inquiry_routes() -> Router<AppState> {
    Router::new()
        .route("/inquiry", get(inquiry::list).post(inquiry::create))
        .route(
            "/inquiry/{id}",
            patch(inquiry::update_status).delete(inquiry::delete),
        )
}
