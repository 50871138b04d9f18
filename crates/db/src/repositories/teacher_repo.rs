//! Repository for the `teachers` table.
//!
//! Duplicate `teacher_id` detection is left to the `uq_teachers_teacher_id`
//! constraint; callers classify the resulting 23505 error.

use siap_core::types::DbId;
use sqlx::PgPool;

use crate::models::teacher::{CreateTeacher, Teacher, UpdateTeacher};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, teacher_id, full_name, gender, place_of_birth, \
                       date_of_birth, religion, education, npwp, phone, address, \
                       created_at, updated_at";

/// Provides CRUD operations for teachers.
pub struct TeacherRepo;

impl TeacherRepo {
    /// Insert a new teacher, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTeacher) -> Result<Teacher, sqlx::Error> {
        let query = format!(
            "INSERT INTO teachers (user_id, teacher_id, full_name, gender, place_of_birth,
                                   date_of_birth, religion, education, npwp, phone, address)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Teacher>(&query)
            .bind(input.user_id)
            .bind(&input.teacher_id)
            .bind(&input.full_name)
            .bind(&input.gender)
            .bind(&input.place_of_birth)
            .bind(input.date_of_birth)
            .bind(&input.religion)
            .bind(&input.education)
            .bind(&input.npwp)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// Find a teacher by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teachers WHERE id = $1");
        sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all teachers ordered by full name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Teacher>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teachers ORDER BY full_name");
        sqlx::query_as::<_, Teacher>(&query).fetch_all(pool).await
    }

    /// Replace a teacher's fields. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeacher,
    ) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!(
            "UPDATE teachers SET
                user_id = $2, teacher_id = $3, full_name = $4, gender = $5,
                place_of_birth = $6, date_of_birth = $7, religion = $8,
                education = $9, npwp = $10, phone = $11, address = $12,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .bind(input.user_id)
            .bind(&input.teacher_id)
            .bind(&input.full_name)
            .bind(&input.gender)
            .bind(&input.place_of_birth)
            .bind(input.date_of_birth)
            .bind(&input.religion)
            .bind(&input.education)
            .bind(&input.npwp)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Delete a teacher. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
