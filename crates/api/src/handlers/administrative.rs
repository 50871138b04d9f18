//! Handlers for administrative documents and meeting minutes.
//!
//! Both resources accept multipart forms: metadata as text fields plus an
//! optional file attachment. Replacing an attachment on update deletes the
//! superseded file once the row change has landed.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use siap_core::error::CoreError;
use siap_core::types::DbId;
use siap_db::models::administrative_document::{
    AdministrativeDocument, CreateAdministrativeDocument, UpdateAdministrativeDocument,
};
use siap_db::models::meeting_minute::{CreateMeetingMinute, MeetingMinute, UpdateMeetingMinute};
use siap_db::repositories::{AdministrativeDocumentRepo, MeetingMinuteRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::forms::RecordForm;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireStaff};
use crate::state::AppState;
use crate::uploads::StoredFile;

/// Store the form's attachment if one was sent.
async fn store_attachment(
    state: &AppState,
    form: &RecordForm,
) -> Result<Option<StoredFile>, AppError> {
    match &form.file {
        Some(file) => Ok(Some(state.uploads.save(&file.file_name, &file.bytes).await?)),
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Administrative documents
// ---------------------------------------------------------------------------

/// GET /api/v1/administrative/documents
pub async fn list_documents(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<AdministrativeDocument>>> {
    let documents = AdministrativeDocumentRepo::list(&state.pool).await?;
    Ok(Json(documents))
}

/// GET /api/v1/administrative/documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<AdministrativeDocument>> {
    let document = AdministrativeDocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AdministrativeDocument",
            id,
        }))?;
    Ok(Json(document))
}

/// POST /api/v1/administrative/documents
pub async fn create_document(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<AdministrativeDocument>)> {
    let form = RecordForm::collect(multipart).await?;
    let document_type = form.required("document_type")?;
    let title = form.required("title")?;
    let document_date = form.date("document_date")?;

    let stored = store_attachment(&state, &form).await?;

    let input = CreateAdministrativeDocument {
        document_type,
        title,
        description: form.text("description"),
        file_path: stored.as_ref().map(|s| s.path.clone()),
        file_name: stored.as_ref().map(|s| s.file_name.clone()),
        document_date,
        status: form.text("status"),
    };

    match AdministrativeDocumentRepo::create(&state.pool, &input).await {
        Ok(document) => Ok((StatusCode::CREATED, Json(document))),
        Err(e) => {
            if let Some(stored) = stored {
                state.uploads.delete_best_effort(&stored.path).await;
            }
            Err(e.into())
        }
    }
}

/// PUT /api/v1/administrative/documents/{id}
///
/// Full metadata replace. When the form carries a new file the previous
/// attachment is deleted after the row update succeeds.
pub async fn update_document(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<AdministrativeDocument>> {
    let existing = AdministrativeDocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AdministrativeDocument",
            id,
        }))?;

    let form = RecordForm::collect(multipart).await?;
    let document_type = form.required("document_type")?;
    let title = form.required("title")?;
    let document_date = form.date("document_date")?;

    let stored = store_attachment(&state, &form).await?;

    let input = UpdateAdministrativeDocument {
        document_type,
        title,
        description: form.text("description"),
        file_path: stored.as_ref().map(|s| s.path.clone()),
        file_name: stored.as_ref().map(|s| s.file_name.clone()),
        document_date,
        status: form.text("status"),
    };

    let updated = match AdministrativeDocumentRepo::update(&state.pool, id, &input).await {
        Ok(Some(document)) => document,
        Ok(None) => {
            if let Some(stored) = stored {
                state.uploads.delete_best_effort(&stored.path).await;
            }
            return Err(AppError::Core(CoreError::NotFound {
                entity: "AdministrativeDocument",
                id,
            }));
        }
        Err(e) => {
            if let Some(stored) = stored {
                state.uploads.delete_best_effort(&stored.path).await;
            }
            return Err(e.into());
        }
    };

    if stored.is_some() {
        if let Some(old_path) = existing.file_path {
            state.uploads.delete_best_effort(&old_path).await;
        }
    }

    Ok(Json(updated))
}

/// DELETE /api/v1/administrative/documents/{id}
pub async fn delete_document(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let document = AdministrativeDocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AdministrativeDocument",
            id,
        }))?;

    if let Some(path) = &document.file_path {
        state.uploads.delete(path).await?;
    }
    AdministrativeDocumentRepo::delete(&state.pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Meeting minutes
// ---------------------------------------------------------------------------

/// GET /api/v1/administrative/meetings
pub async fn list_meetings(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<MeetingMinute>>> {
    let minutes = MeetingMinuteRepo::list(&state.pool).await?;
    Ok(Json(minutes))
}

/// GET /api/v1/administrative/meetings/{id}
pub async fn get_meeting(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<MeetingMinute>> {
    let minute = MeetingMinuteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MeetingMinute",
            id,
        }))?;
    Ok(Json(minute))
}

/// POST /api/v1/administrative/meetings
pub async fn create_meeting(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<MeetingMinute>)> {
    let form = RecordForm::collect(multipart).await?;
    let meeting_title = form.required("meeting_title")?;
    let meeting_date = form.date("meeting_date")?;

    let stored = store_attachment(&state, &form).await?;

    let input = CreateMeetingMinute {
        meeting_title,
        meeting_date,
        participants: form.text("participants"),
        agenda: form.text("agenda"),
        minutes: form.text("minutes"),
        file_path: stored.as_ref().map(|s| s.path.clone()),
        file_name: stored.as_ref().map(|s| s.file_name.clone()),
    };

    match MeetingMinuteRepo::create(&state.pool, &input).await {
        Ok(minute) => Ok((StatusCode::CREATED, Json(minute))),
        Err(e) => {
            if let Some(stored) = stored {
                state.uploads.delete_best_effort(&stored.path).await;
            }
            Err(e.into())
        }
    }
}

/// PUT /api/v1/administrative/meetings/{id}
pub async fn update_meeting(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<MeetingMinute>> {
    let existing = MeetingMinuteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MeetingMinute",
            id,
        }))?;

    let form = RecordForm::collect(multipart).await?;
    let meeting_title = form.required("meeting_title")?;
    let meeting_date = form.date("meeting_date")?;

    let stored = store_attachment(&state, &form).await?;

    let input = UpdateMeetingMinute {
        meeting_title,
        meeting_date,
        participants: form.text("participants"),
        agenda: form.text("agenda"),
        minutes: form.text("minutes"),
        file_path: stored.as_ref().map(|s| s.path.clone()),
        file_name: stored.as_ref().map(|s| s.file_name.clone()),
    };

    let updated = match MeetingMinuteRepo::update(&state.pool, id, &input).await {
        Ok(Some(minute)) => minute,
        Ok(None) => {
            if let Some(stored) = stored {
                state.uploads.delete_best_effort(&stored.path).await;
            }
            return Err(AppError::Core(CoreError::NotFound {
                entity: "MeetingMinute",
                id,
            }));
        }
        Err(e) => {
            if let Some(stored) = stored {
                state.uploads.delete_best_effort(&stored.path).await;
            }
            return Err(e.into());
        }
    };

    if stored.is_some() {
        if let Some(old_path) = existing.file_path {
            state.uploads.delete_best_effort(&old_path).await;
        }
    }

    Ok(Json(updated))
}

/// DELETE /api/v1/administrative/meetings/{id}
pub async fn delete_meeting(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let minute = MeetingMinuteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MeetingMinute",
            id,
        }))?;

    if let Some(path) = &minute.file_path {
        state.uploads.delete(path).await?;
    }
    MeetingMinuteRepo::delete(&state.pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
