//! Teacher entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use siap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full teacher row from the `teachers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Teacher {
    pub id: DbId,
    /// Optional link to a login account.
    pub user_id: Option<DbId>,
    /// Business key (NIP/NUPTK), unique across live teachers.
    pub teacher_id: String,
    pub full_name: String,
    pub gender: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub religion: Option<String>,
    pub education: Option<String>,
    pub npwp: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new teacher.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacher {
    pub user_id: Option<DbId>,
    pub teacher_id: String,
    pub full_name: String,
    pub gender: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub religion: Option<String>,
    pub education: Option<String>,
    pub npwp: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// DTO for updating a teacher. The full field set is replaced, matching the
/// form-based update flow.
#[derive(Debug, Deserialize)]
pub struct UpdateTeacher {
    pub user_id: Option<DbId>,
    pub teacher_id: String,
    pub full_name: String,
    pub gender: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub religion: Option<String>,
    pub education: Option<String>,
    pub npwp: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
