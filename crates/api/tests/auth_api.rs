//! HTTP-level integration tests for the auth endpoints.
//!
//! Tests cover login, the /auth/me profile lookup, and the 401-before-403
//! ordering of the role extractors.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get, get_auth, login_user, post_json};
use sqlx::PgPool;

use siap_api::auth::jwt::{generate_token, JwtConfig};
use siap_core::roles::Role;

/// Successful login returns 200 with a token, expiry, and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "loginuser", "admin").await;
    let (app, _uploads) = common::build_test_app(pool);

    let json = login_user(app, "loginuser", &password).await;

    assert!(json["token"].is_string(), "response must contain token");
    assert_eq!(json["expires_in"], 24 * 3600);
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "loginuser");
    assert_eq!(json["user"]["email"], "loginuser@test.com");
    assert_eq!(json["user"]["role"], "admin");
    assert!(
        json["user"].get("password_hash").is_none(),
        "password hash must never be serialized"
    );
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "wrongpw", "admin").await;
    let (app, _uploads) = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent username returns 401 with the same message as a
/// wrong password, so the endpoint cannot enumerate accounts.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user_is_indistinguishable(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "realuser", "admin").await;
    let (app, _uploads) = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let ghost_json = body_json(response).await;

    let body = serde_json::json!({ "username": "realuser", "password": "wrong" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let wrong_pw_json = body_json(response).await;

    assert_eq!(ghost_json["error"], wrong_pw_json["error"]);
}

/// GET /auth/me returns the authenticated user's profile.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_profile(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "profileuser", "teacher").await;
    let (app, _uploads) = common::build_test_app(pool);

    let login = login_user(app.clone(), "profileuser", &password).await;
    let token = login["token"].as_str().unwrap();

    let response = get_auth(app, "/api/v1/auth/me", token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["username"], "profileuser");
    assert_eq!(json["role"], "teacher");
}

/// Protected endpoints without a token return 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_token_is_unauthorized(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get(app, "/api/v1/teachers").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A garbage token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_token_is_unauthorized(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/teachers", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A token signed with a different secret returns 401 even when the claims
/// would otherwise authorize the call.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_foreign_token_is_unauthorized(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool);

    let foreign = JwtConfig {
        secret: "a-completely-different-secret".to_string(),
        expiry_hours: 24,
    };
    let token = generate_token(1, Role::Admin, &foreign).unwrap();

    let response = get_auth(app, "/api/v1/teachers", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// An unauthenticated request to an admin-only endpoint returns 401, not
/// 403: identity is checked before role.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unauthenticated_beats_forbidden(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool);

    let response = common::delete_auth(app, "/api/v1/teachers/1", "garbage").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
