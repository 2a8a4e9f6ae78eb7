//! Route definitions for the `/admin` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require the `admin` role (enforced by handler
/// extractors).
///
/// ```text
/// GET    /dashboard                  -> dashboard
/// GET    /companies                  -> list_companies (?search=)
/// GET    /companies/pending          -> list_pending_companies
/// POST   /companies/{id}/approve     -> approve_company
/// POST   /companies/{id}/reject      -> reject_company
/// POST   /companies/{id}/blacklist   -> blacklist_company
/// DELETE /companies/{id}             -> delete_company
/// GET    /students                   -> list_students (?search=)
/// GET    /students/{id}              -> get_student
/// PUT    /students/{id}              -> update_student
/// POST   /students/{id}/blacklist    -> blacklist_student
/// DELETE /students/{id}              -> delete_student
/// GET    /drives                     -> list_drives
/// GET    /drives/pending             -> list_pending_drives
/// POST   /drives/{id}/approve        -> approve_drive
/// POST   /drives/{id}/reject         -> reject_drive
/// GET    /applications               -> list_applications
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(admin::dashboard))
        .route("/companies", get(admin::list_companies))
        .route("/companies/pending", get(admin::list_pending_companies))
        .route("/companies/{id}/approve", post(admin::approve_company))
        .route("/companies/{id}/reject", post(admin::reject_company))
        .route("/companies/{id}/blacklist", post(admin::blacklist_company))
        .route(
            "/companies/{id}",
            axum::routing::delete(admin::delete_company),
        )
        .route("/students", get(admin::list_students))
        .route(
            "/students/{id}",
            get(admin::get_student)
                .put(admin::update_student)
                .delete(admin::delete_student),
        )
        .route("/students/{id}/blacklist", post(admin::blacklist_student))
        .route("/drives", get(admin::list_drives))
        .route("/drives/pending", get(admin::list_pending_drives))
        .route("/drives/{id}/approve", post(admin::approve_drive))
        .route("/drives/{id}/reject", post(admin::reject_drive))
        .route("/applications", get(admin::list_applications))
}
