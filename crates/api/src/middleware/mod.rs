//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated account from a
//!   JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.
//! - [`rbac::RequireCompany`] -- Requires the `company` role.
//! - [`rbac::RequireStudent`] -- Requires the `student` role.

pub mod auth;
pub mod rbac;
