//! Handlers for the `/auth` resource (login, refresh, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use placement_core::error::CoreError;
use placement_core::roles::{ROLE_COMPANY, ROLE_STUDENT};
use placement_core::status::APPROVAL_APPROVED;
use placement_core::types::DbId;
use placement_db::repositories::{AccountRepo, CompanyRepo, SessionRepo, StudentRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub account: AccountInfo,
}

/// Public account info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct AccountInfo {
    pub id: DbId,
    pub email: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Company accounts must be
/// approved and not blacklisted; student accounts must not be
/// blacklisted. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Find account by email.
    let account = AccountRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    // 2. Verify password.
    let password_valid = verify_password(&input.password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    // 3. Check if the account is active.
    if !account.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 4. Role-specific gates: company approval + blacklist flags.
    if account.role == ROLE_COMPANY {
        if let Some(company) = CompanyRepo::find_by_account_id(&state.pool, account.id).await? {
            if company.approval_status != APPROVAL_APPROVED {
                return Err(AppError::Core(CoreError::Forbidden(
                    "Company registration is pending approval".into(),
                )));
            }
            if company.is_blacklisted {
                return Err(AppError::Core(CoreError::Forbidden(
                    "Company account is blacklisted".into(),
                )));
            }
        }
    }
    if account.role == ROLE_STUDENT {
        if let Some(student) = StudentRepo::find_by_account_id(&state.pool, account.id).await? {
            if student.is_blacklisted {
                return Err(AppError::Core(CoreError::Forbidden(
                    "Account is blacklisted".into(),
                )));
            }
        }
    }

    // 5. Generate tokens and create a session.
    let response = create_auth_response(&state, account.id, &account.email, &account.role).await?;

    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens. The
/// presented token's session is revoked (rotation).
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Hash the presented refresh token.
    let token_hash = hash_refresh_token(&input.refresh_token);

    // 2. Find a matching active session.
    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // 3. Revoke the old session (token rotation).
    SessionRepo::revoke(&state.pool, session.id).await?;

    // 4. Re-check the account still exists and is active.
    let account = AccountRepo::find_by_id(&state.pool, session.account_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Account no longer exists".into()))
        })?;

    if !account.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 5. Generate new tokens and create a new session.
    let response = create_auth_response(&state, account.id, &account.email, &account.role).await?;

    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated account. Returns 204 No
/// Content.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> AppResult<StatusCode> {
    SessionRepo::revoke_all_for_account(&state.pool, auth.account_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate access + refresh tokens, persist a session row, and build
/// the response.
async fn create_auth_response(
    state: &AppState,
    account_id: DbId,
    email: &str,
    role: &str,
) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(account_id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    let session_input = placement_db::models::session::CreateSession {
        account_id,
        refresh_token_hash: refresh_hash,
        expires_at,
    };
    SessionRepo::create(&state.pool, &session_input).await?;

    let expires_in = state.config.jwt.access_token_expiry_mins * 60;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in,
        account: AccountInfo {
            id: account_id,
            email: email.to_string(),
            role: role.to_string(),
        },
    })
}
