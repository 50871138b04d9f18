//! Handlers for the `/students` resource: CRUD, owned document attachments,
//! and spreadsheet transfer.

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::Json;
use siap_core::error::CoreError;
use siap_core::transfer::ImportSummary;
use siap_core::types::DbId;
use siap_db::models::student::{CreateStudent, Student, UpdateStudent};
use siap_db::models::student_document::{CreateStudentDocument, StudentDocument};
use siap_db::repositories::{StudentDocumentRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::forms::RecordForm;
use crate::handlers::teachers::{read_upload, validate_required};
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::transfer::{self, StudentRow};

/// GET /api/v1/students
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list(&state.pool).await?;
    Ok(Json(students))
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(student))
}

/// POST /api/v1/students
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Json(input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    validate_required(&input.student_id, "student_id")?;
    validate_required(&input.full_name, "full_name")?;

    let student = StudentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// PUT /api/v1/students/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<Json<Student>> {
    validate_required(&input.student_id, "student_id")?;
    validate_required(&input.full_name, "full_name")?;

    let student = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(student))
}

/// DELETE /api/v1/students/{id}
///
/// Cascades to the student's documents: rows go first, inside one
/// transaction, then the stored files are cleaned up best-effort (an orphan
/// file is recoverable; a dangling row is not).
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let file_paths = StudentRepo::delete_with_documents(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;

    for path in &file_paths {
        state.uploads.delete_best_effort(path).await;
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// GET /api/v1/students/{id}/documents
pub async fn list_documents(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(student_id): Path<DbId>,
) -> AppResult<Json<Vec<StudentDocument>>> {
    ensure_student_exists(&state, student_id).await?;
    let documents = StudentDocumentRepo::list_by_student(&state.pool, student_id).await?;
    Ok(Json(documents))
}

/// POST /api/v1/students/{id}/documents
///
/// Multipart upload: a `document_type` field plus one file field. The file
/// is written before the row so a crash in between leaves only an
/// unreferenced file.
pub async fn upload_document(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(student_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<StudentDocument>)> {
    ensure_student_exists(&state, student_id).await?;

    let form = RecordForm::collect(multipart).await?;
    let document_type = form.required("document_type")?;
    let file = form
        .file
        .ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;

    let stored = state.uploads.save(&file.file_name, &file.bytes).await?;

    let created = StudentDocumentRepo::create(
        &state.pool,
        &CreateStudentDocument {
            student_id,
            document_type,
            file_path: stored.path.clone(),
            file_name: stored.file_name,
        },
    )
    .await;

    match created {
        Ok(document) => Ok((StatusCode::CREATED, Json(document))),
        Err(e) => {
            // The row never landed; remove the file we just wrote.
            state.uploads.delete_best_effort(&stored.path).await;
            // The student can vanish between the existence check and the
            // insert; the foreign key reports that as 23503, not a 500.
            if siap_db::is_foreign_key_violation(&e) {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "Student",
                    id: student_id,
                }));
            }
            Err(e.into())
        }
    }
}

/// DELETE /api/v1/students/documents/{id}
///
/// Removes the stored file (tolerating an already-missing file) and then the
/// row, so neither side is left orphaned.
pub async fn delete_document(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let document = StudentDocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StudentDocument",
            id,
        }))?;

    state.uploads.delete(&document.file_path).await?;
    StudentDocumentRepo::delete(&state.pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Spreadsheet transfer
// ---------------------------------------------------------------------------

/// GET /api/v1/students/export
pub async fn export(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<impl axum::response::IntoResponse> {
    let students = StudentRepo::list(&state.pool).await?;
    let bytes = transfer::write_csv(students.iter().map(StudentRow::from))?;

    Ok((
        [
            (header::CONTENT_TYPE, transfer::CSV_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"students.csv\"",
            ),
        ],
        bytes,
    ))
}

/// POST /api/v1/students/import
///
/// Import students from an uploaded CSV. Rows are attempted independently
/// and in sheet order; duplicates and malformed rows are counted as
/// failures without aborting the batch.
pub async fn import(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<ImportSummary>>> {
    let bytes = read_upload(multipart).await?;
    let rows = transfer::read_csv::<StudentRow>(&bytes)?;

    let mut summary = ImportSummary::default();
    for row in rows {
        let input: CreateStudent = match row
            .map_err(|e| AppError::BadRequest(e.to_string()))
            .and_then(|r| CreateStudent::try_from(r).map_err(AppError::Core))
        {
            Ok(input) => input,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unusable import row");
                summary.record_failure();
                continue;
            }
        };

        match StudentRepo::create(&state.pool, &input).await {
            Ok(_) => summary.record_success(),
            Err(e) => {
                tracing::debug!(error = %e, student_id = %input.student_id, "import row rejected");
                summary.record_failure();
            }
        }
    }

    Ok(Json(DataResponse { data: summary }))
}

async fn ensure_student_exists(state: &AppState, id: DbId) -> Result<(), AppError> {
    StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(())
}
