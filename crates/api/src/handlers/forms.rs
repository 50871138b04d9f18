//! Multipart form collection shared by the upload-carrying handlers.
//!
//! The record forms (administrative documents, meeting minutes, student
//! documents) send their metadata as ordinary text fields plus at most one
//! `file` field. This module drains the multipart stream into an in-memory
//! map so handlers can validate fields before touching storage.

use std::collections::HashMap;

use axum::extract::Multipart;
use chrono::NaiveDate;
use siap_core::error::CoreError;

use crate::error::AppError;

/// The uploaded file carried by a form, if any.
#[derive(Debug)]
pub struct FormFile {
    /// Original client filename, display metadata only.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// A fully drained multipart form: text fields plus an optional file.
#[derive(Debug, Default)]
pub struct RecordForm {
    fields: HashMap<String, String>,
    pub file: Option<FormFile>,
}

impl RecordForm {
    /// Drain a multipart stream. Any field carrying a filename is treated as
    /// the attachment; later file fields replace earlier ones.
    pub async fn collect(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = RecordForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();

            if let Some(file_name) = field.file_name() {
                let file_name = file_name.to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.file = Some(FormFile {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// A text field, with empty strings treated as absent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// A required text field; missing or blank fails validation.
    pub fn required(&self, name: &str) -> Result<String, AppError> {
        self.text(name).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Required field '{name}' is missing"
            )))
        })
    }

    /// An optional ISO-8601 date field; present-but-malformed fails validation.
    pub fn date(&self, name: &str) -> Result<Option<NaiveDate>, AppError> {
        match self.text(name) {
            None => Ok(None),
            Some(raw) => raw.parse::<NaiveDate>().map(Some).map_err(|_| {
                AppError::Core(CoreError::Validation(format!(
                    "Field '{name}' must be an ISO date (YYYY-MM-DD)"
                )))
            }),
        }
    }
}
