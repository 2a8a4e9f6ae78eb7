//! Company profile model and DTOs.

use placement_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full company row from the `companies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: DbId,
    pub account_id: DbId,
    pub name: String,
    pub hr_name: Option<String>,
    pub hr_email: Option<String>,
    pub hr_phone: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    /// One of the `APPROVAL_*` constants in `placement_core::status`.
    pub approval_status: String,
    pub is_blacklisted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for atomically creating a company account plus profile.
///
/// The password arrives here already hashed; plaintext handling stays
/// in the api crate.
#[derive(Debug)]
pub struct NewCompanyAccount {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub hr_name: Option<String>,
    pub hr_email: Option<String>,
    pub hr_phone: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating a company profile. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateCompany {
    pub name: Option<String>,
    pub hr_name: Option<String>,
    pub hr_email: Option<String>,
    pub hr_phone: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
}
