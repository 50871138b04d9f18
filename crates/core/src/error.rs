use crate::types::DbId;

/// Domain-level error taxonomy shared by the repository and API layers.
///
/// `Conflict` covers business-key collisions (duplicate teacher_id /
/// student_id); `Internal` carries detail for the logs only and is never
/// shown to clients verbatim.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
