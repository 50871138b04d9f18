//! Student entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use siap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full student row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    /// Business key (NIS/NISN), unique across live students.
    pub student_id: String,
    pub full_name: String,
    pub gender: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub religion: Option<String>,
    pub class_name: Option<String>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new student.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub student_id: String,
    pub full_name: String,
    pub gender: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub religion: Option<String>,
    pub class_name: Option<String>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
    pub address: Option<String>,
}

/// DTO for updating a student. The full field set is replaced, matching the
/// form-based update flow.
#[derive(Debug, Deserialize)]
pub struct UpdateStudent {
    pub student_id: String,
    pub full_name: String,
    pub gender: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub religion: Option<String>,
    pub class_name: Option<String>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
    pub address: Option<String>,
}
