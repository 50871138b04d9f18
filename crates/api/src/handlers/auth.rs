//! Handlers for the `/auth` resource (login, current user).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use siap_core::error::CoreError;
use siap_core::roles::Role;
use siap_db::models::user::UserResponse;
use siap_db::repositories::UserRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Session lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password and receive a session token.
/// Unknown usernames and wrong passwords produce the identical 401 so the
/// endpoint cannot be used to enumerate accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let invalid =
        || AppError::Core(CoreError::Unauthorized("Invalid username or password".into()));

    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    // A stored role outside the closed set means a corrupted row, not a
    // client error.
    let role = Role::from_name(&user.role)
        .map_err(|e| AppError::InternalError(format!("Stored role is invalid: {e}")))?;

    let token = generate_token(user.id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(LoginResponse {
        token,
        expires_in: state.config.jwt.expiry_hours * 3600,
        user: UserResponse::from(&user),
    }))
}

/// GET /api/v1/auth/me
///
/// Return the profile of the authenticated user.
pub async fn me(
    State(state): State<AppState>,
    RequireAuth(auth_user): RequireAuth,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;

    Ok(Json(UserResponse::from(&user)))
}
