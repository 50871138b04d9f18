//! Repository for the `meeting_minutes` table.

use siap_core::types::DbId;
use sqlx::PgPool;

use crate::models::meeting_minute::{CreateMeetingMinute, MeetingMinute, UpdateMeetingMinute};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, meeting_title, meeting_date, participants, agenda, minutes, \
                       file_path, file_name, created_at, updated_at";

/// Provides CRUD operations for meeting minutes.
pub struct MeetingMinuteRepo;

impl MeetingMinuteRepo {
    /// Insert a new meeting minute, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMeetingMinute,
    ) -> Result<MeetingMinute, sqlx::Error> {
        let query = format!(
            "INSERT INTO meeting_minutes
                 (meeting_title, meeting_date, participants, agenda, minutes,
                  file_path, file_name)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MeetingMinute>(&query)
            .bind(&input.meeting_title)
            .bind(input.meeting_date)
            .bind(&input.participants)
            .bind(&input.agenda)
            .bind(&input.minutes)
            .bind(&input.file_path)
            .bind(&input.file_name)
            .fetch_one(pool)
            .await
    }

    /// Find a meeting minute by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MeetingMinute>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meeting_minutes WHERE id = $1");
        sqlx::query_as::<_, MeetingMinute>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all meeting minutes, most recent meeting first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MeetingMinute>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meeting_minutes ORDER BY meeting_date DESC");
        sqlx::query_as::<_, MeetingMinute>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace a meeting minute's metadata. File columns are only overwritten
    /// when a replacement file was stored; `None` keeps the existing
    /// attachment. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMeetingMinute,
    ) -> Result<Option<MeetingMinute>, sqlx::Error> {
        let query = format!(
            "UPDATE meeting_minutes SET
                meeting_title = $2, meeting_date = $3, participants = $4,
                agenda = $5, minutes = $6,
                file_path = COALESCE($7, file_path),
                file_name = COALESCE($8, file_name),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MeetingMinute>(&query)
            .bind(id)
            .bind(&input.meeting_title)
            .bind(input.meeting_date)
            .bind(&input.participants)
            .bind(&input.agenda)
            .bind(&input.minutes)
            .bind(&input.file_path)
            .bind(&input.file_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a meeting minute row. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM meeting_minutes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
