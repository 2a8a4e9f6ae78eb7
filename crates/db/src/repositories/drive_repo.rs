//! Repository for the `drives` table.

use placement_core::types::DbId;
use sqlx::PgPool;

use crate::models::drive::{CreateDrive, Drive, UpdateDrive};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, company_id, job_title, job_description, eligibility_criteria, \
                        min_cgpa, branches_allowed, package_lpa, application_deadline, \
                        status, created_at, updated_at";

/// Provides CRUD operations for placement drives.
pub struct DriveRepo;

impl DriveRepo {
    /// Insert a new drive for a company, returning the created row.
    /// New drives start in `status = 'pending'`.
    pub async fn create(
        pool: &PgPool,
        company_id: DbId,
        input: &CreateDrive,
    ) -> Result<Drive, sqlx::Error> {
        let query = format!(
            "INSERT INTO drives (company_id, job_title, job_description, eligibility_criteria,
                                 min_cgpa, branches_allowed, package_lpa, application_deadline)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drive>(&query)
            .bind(company_id)
            .bind(&input.job_title)
            .bind(&input.job_description)
            .bind(&input.eligibility_criteria)
            .bind(input.min_cgpa)
            .bind(&input.branches_allowed)
            .bind(input.package_lpa)
            .bind(input.application_deadline)
            .fetch_one(pool)
            .await
    }

    /// Find a drive by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Drive>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drives WHERE id = $1");
        sqlx::query_as::<_, Drive>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all drives, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Drive>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drives ORDER BY created_at DESC");
        sqlx::query_as::<_, Drive>(&query).fetch_all(pool).await
    }

    /// List a company's drives, newest first.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<Vec<Drive>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM drives
             WHERE company_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Drive>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// List drives in a given status, newest first.
    pub async fn list_by_status(pool: &PgPool, status: &str) -> Result<Vec<Drive>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM drives
             WHERE status = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Drive>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Update a drive's job posting fields. Only non-`None` fields in
    /// `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDrive,
    ) -> Result<Option<Drive>, sqlx::Error> {
        let query = format!(
            "UPDATE drives SET
                job_title = COALESCE($2, job_title),
                job_description = COALESCE($3, job_description),
                eligibility_criteria = COALESCE($4, eligibility_criteria),
                min_cgpa = COALESCE($5, min_cgpa),
                branches_allowed = COALESCE($6, branches_allowed),
                package_lpa = COALESCE($7, package_lpa),
                application_deadline = COALESCE($8, application_deadline),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drive>(&query)
            .bind(id)
            .bind(&input.job_title)
            .bind(&input.job_description)
            .bind(&input.eligibility_criteria)
            .bind(input.min_cgpa)
            .bind(&input.branches_allowed)
            .bind(input.package_lpa)
            .bind(input.application_deadline)
            .fetch_optional(pool)
            .await
    }

    /// Move a drive to a new status, returning the updated row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Drive>, sqlx::Error> {
        let query = format!(
            "UPDATE drives SET
                status = $2,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drive>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a drive; its applications follow via `ON DELETE CASCADE`.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drives WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of drives.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM drives")
            .fetch_one(pool)
            .await
    }

    /// Number of drives in a given status.
    pub async fn count_by_status(pool: &PgPool, status: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM drives WHERE status = $1")
            .bind(status)
            .fetch_one(pool)
            .await
    }
}
