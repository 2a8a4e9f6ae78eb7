//! First-run seeding of the default admin account.

use placement_core::roles::ROLE_ADMIN;
use placement_db::models::account::CreateAccount;
use placement_db::repositories::AccountRepo;
use placement_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Default admin login, overridable via `ADMIN_EMAIL` / `ADMIN_PASSWORD`.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@portal.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Create the admin account if it does not exist yet.
///
/// Idempotent: a database that already has the admin email registered
/// is left untouched, so this runs unconditionally at startup.
pub async fn ensure_admin_account(pool: &DbPool) -> AppResult<()> {
    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.into());

    if AccountRepo::find_by_email(pool, &email).await?.is_some() {
        tracing::debug!(%email, "Admin account already present, skipping seed");
        return Ok(());
    }

    let password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.into());
    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = CreateAccount {
        email: email.clone(),
        password_hash,
        role: ROLE_ADMIN.to_string(),
    };
    AccountRepo::create(pool, &input).await?;
    tracing::info!(%email, "Seeded default admin account");

    Ok(())
}
