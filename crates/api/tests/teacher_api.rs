//! HTTP-level integration tests for the teacher CRUD endpoints, including
//! role enforcement and duplicate business keys.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, login_as, post_json_auth, put_json_auth};
use sqlx::PgPool;

fn teacher_body(teacher_id: &str, full_name: &str) -> serde_json::Value {
    serde_json::json!({
        "teacher_id": teacher_id,
        "full_name": full_name,
        "gender": "F",
        "place_of_birth": "Bandung",
        "date_of_birth": "1985-06-15",
        "religion": "Islam",
        "education": "S1",
        "phone": "081234567890",
        "address": "Jl. Merdeka 1"
    })
}

/// Full create / read / update / delete cycle as an admin.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_teacher_crud_cycle(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool.clone());
    let token = login_as(app.clone(), &pool, "admin1", "admin").await;

    // Create.
    let response = post_json_auth(
        app.clone(),
        "/api/v1/teachers",
        teacher_body("T001", "Dewi Lestari"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["teacher_id"], "T001");
    assert_eq!(created["full_name"], "Dewi Lestari");

    // Read back.
    let response = get_auth(app.clone(), &format!("/api/v1/teachers/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["education"], "S1");

    // Update replaces the full field set.
    let mut updated_body = teacher_body("T001", "Dewi Lestari, M.Pd");
    updated_body["education"] = serde_json::json!("S2");
    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/teachers/{id}"),
        updated_body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["full_name"], "Dewi Lestari, M.Pd");
    assert_eq!(updated["education"], "S2");

    // Delete.
    let response = delete_auth(app.clone(), &format!("/api/v1/teachers/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone.
    let response = get_auth(app, &format!("/api/v1/teachers/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Listing returns teachers ordered by full name.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_teacher_list_is_name_ordered(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool.clone());
    let token = login_as(app.clone(), &pool, "admin1", "admin").await;

    for (tid, name) in [("T002", "Citra"), ("T001", "Agus"), ("T003", "Budi")] {
        let response =
            post_json_auth(app.clone(), "/api/v1/teachers", teacher_body(tid, name), &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get_auth(app, "/api/v1/teachers", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["full_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Agus", "Budi", "Citra"]);
}

/// Creating a teacher with an existing business key returns 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_teacher_id_conflicts(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool.clone());
    let token = login_as(app.clone(), &pool, "admin1", "admin").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/teachers",
        teacher_body("T001", "Dewi"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(
        app,
        "/api/v1/teachers",
        teacher_body("T001", "Someone Else"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

/// A blank business key fails validation with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_blank_teacher_id_is_rejected(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool.clone());
    let token = login_as(app.clone(), &pool, "admin1", "admin").await;

    let response = post_json_auth(
        app,
        "/api/v1/teachers",
        teacher_body("   ", "Dewi"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A plain teacher can read but not write.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_teacher_role_is_read_only(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool.clone());
    let token = login_as(app.clone(), &pool, "reader", "teacher").await;

    let response = get_auth(app.clone(), "/api/v1/teachers", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json_auth(
        app,
        "/api/v1/teachers",
        teacher_body("T001", "Dewi"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A homeroom teacher can create and update but not delete.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_homeroom_teacher_cannot_delete(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool.clone());
    let token = login_as(app.clone(), &pool, "homeroom", "homeroom_teacher").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/teachers",
        teacher_body("T001", "Dewi"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = delete_auth(app, &format!("/api/v1/teachers/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Updating a missing teacher returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_teacher_is_not_found(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool.clone());
    let token = login_as(app.clone(), &pool, "admin1", "admin").await;

    let response = put_json_auth(
        app,
        "/api/v1/teachers/999999",
        teacher_body("T001", "Dewi"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
