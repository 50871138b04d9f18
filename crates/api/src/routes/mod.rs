pub mod administrative;
pub mod auth;
pub mod health;
pub mod students;
pub mod teachers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                        login (public)
/// /auth/me                           current user
///
/// /teachers                          list, create
/// /teachers/{id}                     get, update, delete
/// /teachers/export                   CSV download
/// /teachers/import                   CSV upload
///
/// /students                          list, create
/// /students/{id}                     get, update, delete (cascades documents)
/// /students/{id}/documents           list, attach
/// /students/documents/{id}           detach
/// /students/export                   CSV download
/// /students/import                   CSV upload
///
/// /administrative/documents          list, create
/// /administrative/documents/{id}     get, update, delete
/// /administrative/meetings           list, create
/// /administrative/meetings/{id}      get, update, delete
/// ```
///
/// Authentication is enforced per handler via extractors, so public and
/// protected routes can live in the same tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/teachers", teachers::router())
        .nest("/students", students::router())
        .nest("/administrative", administrative::router())
}
