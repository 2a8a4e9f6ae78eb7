//! Domain vocabulary shared across the placement portal workspace.
//!
//! Everything here is plain data: ID and timestamp aliases, the error
//! type repositories and handlers speak, and the well-known string
//! constants for roles and lifecycle statuses. No I/O lives in this
//! crate.

pub mod error;
pub mod roles;
pub mod status;
pub mod types;
