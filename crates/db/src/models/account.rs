//! Account entity model and DTOs.

use placement_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// Full account row from the `accounts` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. The api crate's `AccountInfo` carries the public fields.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    /// One of the constants in `placement_core::roles`.
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new account.
#[derive(Debug, Deserialize)]
pub struct CreateAccount {
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
