//! Student document (attachment) model and DTOs.

use serde::Serialize;
use siap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An uploaded file owned by exactly one student.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentDocument {
    pub id: DbId,
    pub student_id: DbId,
    pub document_type: String,
    /// Server-generated storage path; never derived from the client name.
    pub file_path: String,
    /// Original filename as uploaded, for display only.
    pub file_name: String,
    pub created_at: Timestamp,
}

/// DTO for persisting a freshly stored document.
#[derive(Debug)]
pub struct CreateStudentDocument {
    pub student_id: DbId,
    pub document_type: String,
    pub file_path: String,
    pub file_name: String,
}
