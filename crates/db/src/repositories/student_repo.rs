//! Repository for the `students` table.

use placement_core::roles::ROLE_STUDENT;
use placement_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{NewStudentAccount, Student, UpdateStudent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, account_id, name, roll_number, phone, branch, cgpa, \
                        resume_url, is_blacklisted, created_at, updated_at";

/// Provides CRUD operations for student profiles.
pub struct StudentRepo;

impl StudentRepo {
    /// Create the login account and the student profile in a single
    /// transaction, returning the profile row.
    pub async fn create_with_account(
        pool: &PgPool,
        input: &NewStudentAccount,
    ) -> Result<Student, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let account_id: DbId = sqlx::query_scalar(
            "INSERT INTO accounts (email, password_hash, role)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(ROLE_STUDENT)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!(
            "INSERT INTO students (account_id, name, roll_number, phone, branch, cgpa)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let student = sqlx::query_as::<_, Student>(&query)
            .bind(account_id)
            .bind(&input.name)
            .bind(&input.roll_number)
            .bind(&input.phone)
            .bind(&input.branch)
            .bind(input.cgpa)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(student)
    }

    /// Find a student by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the profile belonging to a login account.
    pub async fn find_by_account_id(
        pool: &PgPool,
        account_id: DbId,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE account_id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(account_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a student by roll number.
    pub async fn find_by_roll_number(
        pool: &PgPool,
        roll_number: &str,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE roll_number = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(roll_number)
            .fetch_optional(pool)
            .await
    }

    /// List all students ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY name");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Case-insensitive substring search over name, roll number and
    /// phone.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students
             WHERE name ILIKE $1 OR roll_number ILIKE $1 OR phone ILIKE $1
             ORDER BY name"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(format!("%{term}%"))
            .fetch_all(pool)
            .await
    }

    /// Update a student profile. Only non-`None` fields in `input` are
    /// applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                branch = COALESCE($4, branch),
                cgpa = COALESCE($5, cgpa),
                resume_url = COALESCE($6, resume_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.branch)
            .bind(input.cgpa)
            .bind(&input.resume_url)
            .fetch_optional(pool)
            .await
    }

    /// Flip the blacklist flag, returning the updated row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn toggle_blacklist(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                is_blacklisted = NOT is_blacklisted,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student's login account; the profile and all
    /// applications follow via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if the account was deleted.
    pub async fn delete_with_account(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM accounts
             WHERE id = (SELECT account_id FROM students WHERE id = $1)",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of registered students.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(pool)
            .await
    }
}
