//! Route definitions for the public `/register` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::register;
use crate::state::AppState;

/// Routes mounted at `/register`. Both are public.
///
/// ```text
/// POST /student  -> register_student
/// POST /company  -> register_company
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/student", post(register::register_student))
        .route("/company", post(register::register_company))
}
