//! Route definitions for the `/company` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::company;
use crate::state::AppState;

/// Routes mounted at `/company`.
///
/// All routes require the `company` role; drive routes additionally
/// verify ownership in the handler.
///
/// ```text
/// GET    /dashboard                     -> dashboard
/// GET    /profile                       -> get_profile
/// PUT    /profile                       -> update_profile
/// GET    /drives                        -> list_drives
/// POST   /drives                        -> create_drive
/// GET    /drives/{id}                   -> get_drive
/// PUT    /drives/{id}                   -> update_drive
/// DELETE /drives/{id}                   -> delete_drive
/// POST   /drives/{id}/close             -> close_drive
/// GET    /drives/{id}/applications      -> list_drive_applications
/// POST   /applications/{id}/status      -> update_application_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(company::dashboard))
        .route(
            "/profile",
            get(company::get_profile).put(company::update_profile),
        )
        .route(
            "/drives",
            get(company::list_drives).post(company::create_drive),
        )
        .route(
            "/drives/{id}",
            get(company::get_drive)
                .put(company::update_drive)
                .delete(company::delete_drive),
        )
        .route("/drives/{id}/close", post(company::close_drive))
        .route(
            "/drives/{id}/applications",
            get(company::list_drive_applications),
        )
        .route(
            "/applications/{id}/status",
            post(company::update_application_status),
        )
}
