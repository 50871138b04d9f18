//! Startup bootstrap: guarantee at least one admin account exists.

use siap_core::roles::ROLE_ADMIN;
use siap_db::models::user::CreateUser;
use siap_db::repositories::UserRepo;
use siap_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::AppError;

/// Create the default admin account when the users table is empty.
///
/// Credentials come from `ADMIN_USERNAME` / `ADMIN_PASSWORD` /
/// `ADMIN_EMAIL`, falling back to local-development defaults. A non-empty
/// users table leaves everything untouched, so an operator who has already
/// rotated the default account never sees it reappear.
pub async fn ensure_default_admin(pool: &DbPool) -> Result<(), AppError> {
    if UserRepo::count(pool).await? > 0 {
        return Ok(());
    }

    let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "password".into());
    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@siap.local".into());

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username,
            email,
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await?;

    tracing::info!(username = %user.username, "Created default admin account");
    Ok(())
}
