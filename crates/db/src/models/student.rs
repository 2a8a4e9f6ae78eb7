//! Student profile model and DTOs.

use placement_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full student row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub account_id: DbId,
    pub name: String,
    pub roll_number: String,
    pub phone: Option<String>,
    pub branch: Option<String>,
    pub cgpa: f64,
    pub resume_url: Option<String>,
    pub is_blacklisted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for atomically creating a student account plus profile.
///
/// The password arrives here already hashed; plaintext handling stays
/// in the api crate.
#[derive(Debug)]
pub struct NewStudentAccount {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub roll_number: String,
    pub phone: Option<String>,
    pub branch: Option<String>,
    pub cgpa: f64,
}

/// DTO for updating a student profile. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateStudent {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub branch: Option<String>,
    pub cgpa: Option<f64>,
    pub resume_url: Option<String>,
}
