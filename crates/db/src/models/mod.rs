//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches where the entity
//!   supports partial edits

pub mod account;
pub mod application;
pub mod company;
pub mod drive;
pub mod session;
pub mod student;
