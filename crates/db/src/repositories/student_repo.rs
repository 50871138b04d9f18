//! Repository for the `students` table.
//!
//! Duplicate `student_id` detection is left to the `uq_students_student_id`
//! constraint; callers classify the resulting 23505 error.

use siap_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student, UpdateStudent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, full_name, gender, place_of_birth, date_of_birth, \
                       religion, class_name, parent_name, parent_phone, address, \
                       created_at, updated_at";

/// Provides CRUD operations for students, including the document cascade.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (student_id, full_name, gender, place_of_birth,
                                   date_of_birth, religion, class_name, parent_name,
                                   parent_phone, address)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.student_id)
            .bind(&input.full_name)
            .bind(&input.gender)
            .bind(&input.place_of_birth)
            .bind(input.date_of_birth)
            .bind(&input.religion)
            .bind(&input.class_name)
            .bind(&input.parent_name)
            .bind(&input.parent_phone)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// Find a student by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all students ordered by full name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY full_name");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Replace a student's fields. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                student_id = $2, full_name = $3, gender = $4, place_of_birth = $5,
                date_of_birth = $6, religion = $7, class_name = $8, parent_name = $9,
                parent_phone = $10, address = $11, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.student_id)
            .bind(&input.full_name)
            .bind(&input.gender)
            .bind(&input.place_of_birth)
            .bind(input.date_of_birth)
            .bind(&input.religion)
            .bind(&input.class_name)
            .bind(&input.parent_name)
            .bind(&input.parent_phone)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student together with all owned document rows, in one
    /// transaction.
    ///
    /// Returns the stored file paths of the removed documents so the caller
    /// can clean up the filesystem after commit, or `None` if the student
    /// does not exist. Deleting rows before files means a crash leaves at
    /// most orphaned files, never rows pointing at missing files.
    pub async fn delete_with_documents(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Vec<String>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<DbId> = sqlx::query_scalar("SELECT id FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let file_paths: Vec<String> =
            sqlx::query_scalar("SELECT file_path FROM student_documents WHERE student_id = $1")
                .bind(id)
                .fetch_all(&mut *tx)
                .await?;

        sqlx::query("DELETE FROM student_documents WHERE student_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(file_paths))
    }
}
