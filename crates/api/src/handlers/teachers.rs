//! Handlers for the `/teachers` resource, including spreadsheet transfer.

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::Json;
use siap_core::error::CoreError;
use siap_core::transfer::ImportSummary;
use siap_core::types::DbId;
use siap_db::models::teacher::{CreateTeacher, Teacher, UpdateTeacher};
use siap_db::repositories::TeacherRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::transfer::{self, TeacherRow};

/// GET /api/v1/teachers
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<Teacher>>> {
    let teachers = TeacherRepo::list(&state.pool).await?;
    Ok(Json(teachers))
}

/// GET /api/v1/teachers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Teacher>> {
    let teacher = TeacherRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id,
        }))?;
    Ok(Json(teacher))
}

/// POST /api/v1/teachers
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Json(input): Json<CreateTeacher>,
) -> AppResult<(StatusCode, Json<Teacher>)> {
    validate_required(&input.teacher_id, "teacher_id")?;
    validate_required(&input.full_name, "full_name")?;

    let teacher = TeacherRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

/// PUT /api/v1/teachers/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeacher>,
) -> AppResult<Json<Teacher>> {
    validate_required(&input.teacher_id, "teacher_id")?;
    validate_required(&input.full_name, "full_name")?;

    let teacher = TeacherRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id,
        }))?;
    Ok(Json(teacher))
}

/// DELETE /api/v1/teachers/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TeacherRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/teachers/export
///
/// All teachers as a CSV download in the fixed column order.
pub async fn export(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<impl axum::response::IntoResponse> {
    let teachers = TeacherRepo::list(&state.pool).await?;
    let bytes = transfer::write_csv(teachers.iter().map(TeacherRow::from))?;

    Ok((
        [
            (header::CONTENT_TYPE, transfer::CSV_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"teachers.csv\"",
            ),
        ],
        bytes,
    ))
}

/// POST /api/v1/teachers/import
///
/// Import teachers from an uploaded CSV. Every row is attempted
/// independently; a duplicate business key or malformed row counts as a
/// failure without aborting the batch.
pub async fn import(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<ImportSummary>>> {
    let bytes = read_upload(multipart).await?;
    let rows = transfer::read_csv::<TeacherRow>(&bytes)?;

    let mut summary = ImportSummary::default();
    for row in rows {
        let input: CreateTeacher = match row
            .map_err(|e| AppError::BadRequest(e.to_string()))
            .and_then(|r| CreateTeacher::try_from(r).map_err(AppError::Core))
        {
            Ok(input) => input,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unusable import row");
                summary.record_failure();
                continue;
            }
        };

        match TeacherRepo::create(&state.pool, &input).await {
            Ok(_) => summary.record_success(),
            Err(e) => {
                tracing::debug!(error = %e, teacher_id = %input.teacher_id, "import row rejected");
                summary.record_failure();
            }
        }
    }

    Ok(Json(DataResponse { data: summary }))
}

/// Drain a single-file multipart upload into memory.
pub(super) async fn read_upload(mut multipart: Multipart) -> Result<Vec<u8>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.file_name().is_some() {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            return Ok(bytes.to_vec());
        }
    }
    Err(AppError::BadRequest("No file uploaded".to_string()))
}

pub(super) fn validate_required(value: &str, name: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Required field '{name}' is missing"
        ))));
    }
    Ok(())
}
