//! Route definitions for the `/administrative` resources (documents and
//! meeting minutes).

use axum::routing::get;
use axum::Router;

use crate::handlers::administrative;
use crate::state::AppState;

/// Routes mounted at `/administrative`.
///
/// ```text
/// GET    /documents        -> list (any authenticated role)
/// POST   /documents        -> create, multipart (admin, homeroom teacher)
/// GET    /documents/{id}   -> get by id (any authenticated role)
/// PUT    /documents/{id}   -> update, multipart (admin, homeroom teacher)
/// DELETE /documents/{id}   -> delete (admin only)
/// GET    /meetings         -> list (any authenticated role)
/// POST   /meetings         -> create, multipart (admin, homeroom teacher)
/// GET    /meetings/{id}    -> get by id (any authenticated role)
/// PUT    /meetings/{id}    -> update, multipart (admin, homeroom teacher)
/// DELETE /meetings/{id}    -> delete (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/documents",
            get(administrative::list_documents).post(administrative::create_document),
        )
        .route(
            "/documents/{id}",
            get(administrative::get_document)
                .put(administrative::update_document)
                .delete(administrative::delete_document),
        )
        .route(
            "/meetings",
            get(administrative::list_meetings).post(administrative::create_meeting),
        )
        .route(
            "/meetings/{id}",
            get(administrative::get_meeting)
                .put(administrative::update_meeting)
                .delete(administrative::delete_meeting),
        )
}
