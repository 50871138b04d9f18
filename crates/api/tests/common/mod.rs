#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use siap_api::auth::jwt::JwtConfig;
use siap_api::auth::password::hash_password;
use siap_api::config::ServerConfig;
use siap_api::router::build_app_router;
use siap_api::state::AppState;
use siap_api::uploads::UploadStore;
use siap_db::models::user::{CreateUser, User};
use siap_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(upload_dir: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: upload_dir.to_string(),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_hours: 24,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a throwaway upload directory.
///
/// This goes through [`build_app_router`] so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses. The returned [`TempDir`] owns the upload
/// directory; keep it alive for the duration of the test.
pub fn build_test_app(pool: PgPool) -> (Router, TempDir) {
    let upload_dir = tempfile::tempdir().expect("temp upload dir should be created");
    let config = test_config(upload_dir.path().to_str().unwrap());

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        uploads: Arc::new(UploadStore::new(upload_dir.path())),
    };

    (build_app_router(state, &config), upload_dir)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request)
        .await
        .expect("request should be handled")
}

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = builder(Method::GET, uri, None)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = builder(Method::GET, uri, Some(token))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = builder(Method::POST, uri, None)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = builder(Method::POST, uri, Some(token))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = builder(Method::PUT, uri, Some(token))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = builder(Method::DELETE, uri, Some(token))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Boundary used by the multipart helpers.
const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Build a `multipart/form-data` body from text fields plus an optional
/// file part `(field_name, file_name, bytes)`.
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((name, file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

pub async fn send_multipart_auth(
    app: Router,
    method: Method,
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
    token: &str,
) -> Response<Body> {
    let (content_type, body) = multipart_body(fields, file);
    let request = builder(method, uri, Some(token))
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    use http_body_util::BodyExt;
    response
        .into_body()
        .collect()
        .await
        .expect("response body should be readable")
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Create a test user directly in the database and return the user row plus
/// the plaintext password used.
pub async fn create_test_user(pool: &PgPool, username: &str, role: &str) -> (User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hashed,
        role: role.to_string(),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Log in a user via the API and return the JSON response containing
/// `token`, `expires_in`, and `user` info.
pub async fn login_user(app: Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// Create a user with the given role and return a valid session token.
pub async fn login_as(app: Router, pool: &PgPool, username: &str, role: &str) -> String {
    let (_user, password) = create_test_user(pool, username, role).await;
    let json = login_user(app, username, &password).await;
    json["token"]
        .as_str()
        .expect("login response must contain a token")
        .to_string()
}
