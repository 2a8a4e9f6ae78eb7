//! HTTP route definitions.
//!
//! Each submodule owns one slice of the URL space and exposes a
//! `router()` returning `Router<AppState>`. [`api_routes`] stitches
//! them together under a single versioned prefix; the health probe
//! stays unversioned at the root.

use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod auth;
pub mod company;
pub mod health;
pub mod register;
pub mod student;

/// All routes mounted under `/api/v1`.
///
/// ```text
/// /api/v1
/// ├── /auth      login, token refresh, logout
/// ├── /register  student and company self-registration
/// ├── /admin     full portal administration (admin role)
/// ├── /company   profile, drives, applicant review (company role)
/// └── /student   profile, open drives, applications (student role)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/register", register::router())
        .nest("/admin", admin::router())
        .nest("/company", company::router())
        .nest("/student", student::router())
}
