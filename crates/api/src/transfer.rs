//! Bulk transfer: spreadsheet (CSV) export and import row mapping.
//!
//! Export projects repository rows onto fixed-column row structs and
//! serializes them; import parses the same columns back and feeds each row
//! independently into the repository `create`. Row order is preserved as
//! processing order, and rows share no state beyond the
//! [`siap_core::transfer::ImportSummary`] counters kept by the handlers.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use siap_core::error::CoreError;
use siap_db::models::student::{CreateStudent, Student};
use siap_db::models::teacher::{CreateTeacher, Teacher};

use crate::error::AppError;

/// Spreadsheet content type used for exports.
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

// ---------------------------------------------------------------------------
// Row structs (fixed column order)
// ---------------------------------------------------------------------------

/// One teacher spreadsheet row. Field order defines the column order.
#[derive(Debug, Serialize, Deserialize)]
pub struct TeacherRow {
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

impl From<&Teacher> for TeacherRow {
    fn from(t: &Teacher) -> Self {
        Self {
            teacher_id: t.teacher_id.clone(),
            full_name: t.full_name.clone(),
            gender: t.gender.clone(),
            place_of_birth: t.place_of_birth.clone(),
            date_of_birth: t.date_of_birth,
            religion: t.religion.clone(),
            education: t.education.clone(),
            npwp: t.npwp.clone(),
            phone: t.phone.clone(),
            address: t.address.clone(),
        }
    }
}

impl TryFrom<TeacherRow> for CreateTeacher {
    type Error = CoreError;

    fn try_from(row: TeacherRow) -> Result<Self, Self::Error> {
        require_field(&row.teacher_id, "teacher_id")?;
        require_field(&row.full_name, "full_name")?;
        Ok(CreateTeacher {
            user_id: None,
            teacher_id: row.teacher_id,
            full_name: row.full_name,
            gender: row.gender,
            place_of_birth: row.place_of_birth,
            date_of_birth: row.date_of_birth,
            religion: row.religion,
            education: row.education,
            npwp: row.npwp,
            phone: row.phone,
            address: row.address,
        })
    }
}

/// One student spreadsheet row. Field order defines the column order.
#[derive(Debug, Serialize, Deserialize)]
pub struct StudentRow {
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

impl From<&Student> for StudentRow {
    fn from(s: &Student) -> Self {
        Self {
            student_id: s.student_id.clone(),
            full_name: s.full_name.clone(),
            gender: s.gender.clone(),
            place_of_birth: s.place_of_birth.clone(),
            date_of_birth: s.date_of_birth,
            religion: s.religion.clone(),
            class_name: s.class_name.clone(),
            parent_name: s.parent_name.clone(),
            parent_phone: s.parent_phone.clone(),
            address: s.address.clone(),
        }
    }
}

impl TryFrom<StudentRow> for CreateStudent {
    type Error = CoreError;

    fn try_from(row: StudentRow) -> Result<Self, Self::Error> {
        require_field(&row.student_id, "student_id")?;
        require_field(&row.full_name, "full_name")?;
        Ok(CreateStudent {
            student_id: row.student_id,
            full_name: row.full_name,
            gender: row.gender,
            place_of_birth: row.place_of_birth,
            date_of_birth: row.date_of_birth,
            religion: row.religion,
            class_name: row.class_name,
            parent_name: row.parent_name,
            parent_phone: row.parent_phone,
            address: row.address,
        })
    }
}

fn require_field(value: &str, name: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Required field '{name}' is missing"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

/// Serialize rows to CSV bytes with a header record.
pub fn write_csv<T: Serialize>(rows: impl IntoIterator<Item = T>) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::InternalError(format!("CSV serialization failed: {e}")))?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::InternalError(format!("CSV serialization failed: {e}")))
}

/// Parse CSV bytes into per-row results.
///
/// Failure to read the header record means the spreadsheet itself is
/// unusable and aborts the batch with 400; after that, each row
/// deserializes independently so one malformed row (e.g. a bad date) is
/// counted by the caller without aborting its neighbours.
pub fn read_csv<T: DeserializeOwned>(
    bytes: &[u8],
) -> Result<Vec<Result<T, csv::Error>>, AppError> {
    let mut reader = csv::Reader::from_reader(bytes);
    reader
        .headers()
        .map_err(|e| AppError::BadRequest(format!("Unreadable spreadsheet: {e}")))?;
    Ok(reader.deserialize::<T>().collect())
}
