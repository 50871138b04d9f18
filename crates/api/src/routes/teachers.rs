//! Route definitions for the `/teachers` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::teachers;
use crate::state::AppState;

/// Routes mounted at `/teachers`.
///
/// ```text
/// GET    /            -> list (any authenticated role)
/// POST   /            -> create (admin, homeroom teacher)
/// GET    /export      -> CSV download (any authenticated role)
/// POST   /import      -> CSV upload (admin, homeroom teacher)
/// GET    /{id}        -> get by id (any authenticated role)
/// PUT    /{id}        -> update (admin, homeroom teacher)
/// DELETE /{id}        -> delete (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(teachers::list).post(teachers::create))
        .route("/export", get(teachers::export))
        .route("/import", post(teachers::import))
        .route(
            "/{id}",
            get(teachers::get_by_id)
                .put(teachers::update)
                .delete(teachers::delete),
        )
}
