//! Route definitions for the `/students` resource, including owned documents.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::students;
use crate::state::AppState;

/// Routes mounted at `/students`.
///
/// ```text
/// GET    /                  -> list (any authenticated role)
/// POST   /                  -> create (admin, homeroom teacher)
/// GET    /export            -> CSV download (any authenticated role)
/// POST   /import            -> CSV upload (admin, homeroom teacher)
/// GET    /{id}              -> get by id (any authenticated role)
/// PUT    /{id}              -> update (admin, homeroom teacher)
/// DELETE /{id}              -> delete + document cascade (admin only)
/// GET    /{id}/documents    -> list documents (any authenticated role)
/// POST   /{id}/documents    -> attach document (admin, homeroom teacher)
/// DELETE /documents/{id}    -> detach document (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(students::list).post(students::create))
        .route("/export", get(students::export))
        .route("/import", post(students::import))
        .route("/documents/{id}", delete(students::delete_document))
        .route(
            "/{id}",
            get(students::get_by_id)
                .put(students::update)
                .delete(students::delete),
        )
        .route(
            "/{id}/documents",
            get(students::list_documents).post(students::upload_document),
        )
}
