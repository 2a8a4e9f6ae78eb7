//! Application model and the joined detail row.

use placement_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full application row from the `applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: DbId,
    pub student_id: DbId,
    pub drive_id: DbId,
    /// One of the `APPLICATION_*` constants in `placement_core::status`.
    pub status: String,
    pub applied_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Application joined with the student, drive and company it belongs
/// to. This is what every listing screen renders, so the repository
/// returns it directly instead of making callers stitch rows together.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationDetail {
    pub id: DbId,
    pub student_id: DbId,
    pub student_name: String,
    pub roll_number: String,
    pub branch: Option<String>,
    pub cgpa: f64,
    pub drive_id: DbId,
    pub job_title: String,
    pub company_name: String,
    pub status: String,
    pub applied_at: Timestamp,
}
