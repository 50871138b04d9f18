//! Administrative document model and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use siap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full administrative document row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdministrativeDocument {
    pub id: DbId,
    pub document_type: String,
    pub title: String,
    pub description: Option<String>,
    pub file_path: Option<String>,
    pub file_name: Option<String>,
    pub document_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an administrative document. File fields are filled in by
/// the attachment manager when the multipart form carried a file.
#[derive(Debug, Default)]
pub struct CreateAdministrativeDocument {
    pub document_type: String,
    pub title: String,
    pub description: Option<String>,
    pub file_path: Option<String>,
    pub file_name: Option<String>,
    pub document_date: Option<NaiveDate>,
    pub status: Option<String>,
}

/// DTO for updating an administrative document. `file_path`/`file_name` of
/// `None` leave the stored attachment untouched.
#[derive(Debug, Default)]
pub struct UpdateAdministrativeDocument {
    pub document_type: String,
    pub title: String,
    pub description: Option<String>,
    pub file_path: Option<String>,
    pub file_name: Option<String>,
    pub document_date: Option<NaiveDate>,
    pub status: Option<String>,
}
