//! Meeting minute model and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use siap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full meeting minute row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MeetingMinute {
    pub id: DbId,
    pub meeting_title: String,
    pub meeting_date: Option<NaiveDate>,
    pub participants: Option<String>,
    pub agenda: Option<String>,
    pub minutes: Option<String>,
    pub file_path: Option<String>,
    pub file_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a meeting minute. File fields are filled in by the
/// attachment manager when the multipart form carried a file.
#[derive(Debug, Default)]
pub struct CreateMeetingMinute {
    pub meeting_title: String,
    pub meeting_date: Option<NaiveDate>,
    pub participants: Option<String>,
    pub agenda: Option<String>,
    pub minutes: Option<String>,
    pub file_path: Option<String>,
    pub file_name: Option<String>,
}

/// DTO for updating a meeting minute. `file_path`/`file_name` of `None`
/// leave the stored attachment untouched.
#[derive(Debug, Default)]
pub struct UpdateMeetingMinute {
    pub meeting_title: String,
    pub meeting_date: Option<NaiveDate>,
    pub participants: Option<String>,
    pub agenda: Option<String>,
    pub minutes: Option<String>,
    pub file_path: Option<String>,
    pub file_name: Option<String>,
}
