//! Placement drive model and DTOs.

use chrono::NaiveDate;
use placement_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full drive row from the `drives` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Drive {
    pub id: DbId,
    pub company_id: DbId,
    pub job_title: String,
    pub job_description: Option<String>,
    pub eligibility_criteria: Option<String>,
    pub min_cgpa: f64,
    pub branches_allowed: Option<String>,
    pub package_lpa: Option<f64>,
    pub application_deadline: Option<NaiveDate>,
    /// One of the `DRIVE_*` constants in `placement_core::status`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new drive. The owning company comes from the
/// authenticated caller, not the body.
#[derive(Debug, Deserialize)]
pub struct CreateDrive {
    pub job_title: String,
    pub job_description: Option<String>,
    pub eligibility_criteria: Option<String>,
    pub min_cgpa: Option<f64>,
    pub branches_allowed: Option<String>,
    pub package_lpa: Option<f64>,
    pub application_deadline: Option<NaiveDate>,
}

/// DTO for updating a drive. All fields are optional; status moves
/// through its own endpoints.
#[derive(Debug, Deserialize)]
pub struct UpdateDrive {
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub eligibility_criteria: Option<String>,
    pub min_cgpa: Option<f64>,
    pub branches_allowed: Option<String>,
    pub package_lpa: Option<f64>,
    pub application_deadline: Option<NaiveDate>,
}
