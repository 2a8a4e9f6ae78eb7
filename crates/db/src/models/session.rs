//! Auth session model and DTOs.

use placement_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An auth session row from the `auth_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct AuthSession {
    pub id: DbId,
    pub account_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new auth session.
pub struct CreateSession {
    pub account_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
