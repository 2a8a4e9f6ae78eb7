//! Repository for the `companies` table.

use placement_core::roles::ROLE_COMPANY;
use placement_core::types::DbId;
use sqlx::PgPool;

use crate::models::company::{Company, NewCompanyAccount, UpdateCompany};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, account_id, name, hr_name, hr_email, hr_phone, website, \
                        description, approval_status, is_blacklisted, created_at, updated_at";

/// Provides CRUD operations for company profiles.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Create the login account and the company profile in a single
    /// transaction, returning the profile row. The profile starts in
    /// `approval_status = 'pending'`.
    pub async fn create_with_account(
        pool: &PgPool,
        input: &NewCompanyAccount,
    ) -> Result<Company, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let account_id: DbId = sqlx::query_scalar(
            "INSERT INTO accounts (email, password_hash, role)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(ROLE_COMPANY)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!(
            "INSERT INTO companies (account_id, name, hr_name, hr_email, hr_phone,
                                    website, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let company = sqlx::query_as::<_, Company>(&query)
            .bind(account_id)
            .bind(&input.name)
            .bind(&input.hr_name)
            .bind(&input.hr_email)
            .bind(&input.hr_phone)
            .bind(&input.website)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(company)
    }

    /// Find the profile belonging to a login account.
    pub async fn find_by_account_id(
        pool: &PgPool,
        account_id: DbId,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE account_id = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(account_id)
            .fetch_optional(pool)
            .await
    }

    /// List all companies ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies ORDER BY name");
        sqlx::query_as::<_, Company>(&query).fetch_all(pool).await
    }

    /// Case-insensitive substring search over company name.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM companies
             WHERE name ILIKE $1
             ORDER BY name"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(format!("%{term}%"))
            .fetch_all(pool)
            .await
    }

    /// List companies in a given approval status, oldest first so the
    /// admin review queue is first-come first-served.
    pub async fn list_by_approval_status(
        pool: &PgPool,
        status: &str,
    ) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM companies
             WHERE approval_status = $1
             ORDER BY created_at"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Update a company profile. Only non-`None` fields in `input` are
    /// applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET
                name = COALESCE($2, name),
                hr_name = COALESCE($3, hr_name),
                hr_email = COALESCE($4, hr_email),
                hr_phone = COALESCE($5, hr_phone),
                website = COALESCE($6, website),
                description = COALESCE($7, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.hr_name)
            .bind(&input.hr_email)
            .bind(&input.hr_phone)
            .bind(&input.website)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Move a company to a new approval status, returning the updated
    /// row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_approval_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET
                approval_status = $2,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Flip the blacklist flag, returning the updated row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn toggle_blacklist(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET
                is_blacklisted = NOT is_blacklisted,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a company's login account; the profile, its drives and
    /// their applications follow via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if the account was deleted.
    pub async fn delete_with_account(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM accounts
             WHERE id = (SELECT account_id FROM companies WHERE id = $1)",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of registered companies.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM companies")
            .fetch_one(pool)
            .await
    }

    /// Number of companies in a given approval status.
    pub async fn count_by_approval_status(
        pool: &PgPool,
        status: &str,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM companies WHERE approval_status = $1")
            .bind(status)
            .fetch_one(pool)
            .await
    }
}
