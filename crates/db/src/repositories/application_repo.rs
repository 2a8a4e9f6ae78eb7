//! Repository for the `applications` table.

use placement_core::types::DbId;
use sqlx::PgPool;

use crate::models::application::{Application, ApplicationDetail};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, drive_id, status, applied_at, updated_at";

/// SELECT head for [`ApplicationDetail`] rows, joined across student,
/// drive and company.
const DETAIL_SELECT: &str = "SELECT a.id, a.student_id, s.name AS student_name, s.roll_number,
            s.branch, s.cgpa, a.drive_id, d.job_title, c.name AS company_name,
            a.status, a.applied_at
     FROM applications a
     JOIN students s ON s.id = a.student_id
     JOIN drives d ON d.id = a.drive_id
     JOIN companies c ON c.id = d.company_id";

/// Provides CRUD operations for applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a new application in the initial `applied` status,
    /// returning the created row.
    ///
    /// The `uq_applications_student_id_drive_id` constraint rejects a
    /// second application to the same drive.
    pub async fn create(
        pool: &PgPool,
        student_id: DbId,
        drive_id: DbId,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications (student_id, drive_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(student_id)
            .bind(drive_id)
            .fetch_one(pool)
            .await
    }

    /// Find an application by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a student's application to a specific drive, if any.
    pub async fn find_by_student_and_drive(
        pool: &PgPool,
        student_id: DbId,
        drive_id: DbId,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM applications
             WHERE student_id = $1 AND drive_id = $2"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(student_id)
            .bind(drive_id)
            .fetch_optional(pool)
            .await
    }

    /// List every application with its joined detail, newest first.
    pub async fn list_details(pool: &PgPool) -> Result<Vec<ApplicationDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY a.applied_at DESC");
        sqlx::query_as::<_, ApplicationDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// List applications to one drive with joined detail, newest first.
    pub async fn list_details_by_drive(
        pool: &PgPool,
        drive_id: DbId,
    ) -> Result<Vec<ApplicationDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE a.drive_id = $1 ORDER BY a.applied_at DESC");
        sqlx::query_as::<_, ApplicationDetail>(&query)
            .bind(drive_id)
            .fetch_all(pool)
            .await
    }

    /// List one student's applications with joined detail, newest
    /// first.
    pub async fn list_details_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<ApplicationDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE a.student_id = $1 ORDER BY a.applied_at DESC");
        sqlx::query_as::<_, ApplicationDetail>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// IDs of every drive a student has applied to.
    pub async fn drive_ids_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT drive_id FROM applications WHERE student_id = $1")
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// Move an application to a new funnel status, returning the
    /// updated row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "UPDATE applications SET
                status = $2,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Total number of applications.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM applications")
            .fetch_one(pool)
            .await
    }

    /// Number of applications across all of a company's drives.
    pub async fn count_by_company(pool: &PgPool, company_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM applications a
             JOIN drives d ON d.id = a.drive_id
             WHERE d.company_id = $1",
        )
        .bind(company_id)
        .fetch_one(pool)
        .await
    }
}
