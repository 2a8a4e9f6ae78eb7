//! Route definitions for the `/student` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/student`.
///
/// All routes require the `student` role (enforced by handler
/// extractors).
///
/// ```text
/// GET  /dashboard           -> dashboard
/// GET  /profile             -> get_profile
/// PUT  /profile             -> update_profile
/// GET  /drives              -> list_drives
/// POST /drives/{id}/apply   -> apply_to_drive
/// GET  /history             -> history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(student::dashboard))
        .route(
            "/profile",
            get(student::get_profile).put(student::update_profile),
        )
        .route("/drives", get(student::list_drives))
        .route("/drives/{id}/apply", post(student::apply_to_drive))
        .route("/history", get(student::history))
}
