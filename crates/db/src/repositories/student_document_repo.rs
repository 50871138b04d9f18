//! Repository for the `student_documents` table.

use siap_core::types::DbId;
use sqlx::PgPool;

use crate::models::student_document::{CreateStudentDocument, StudentDocument};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, document_type, file_path, file_name, created_at";

/// Provides persistence for student document attachments.
pub struct StudentDocumentRepo;

impl StudentDocumentRepo {
    /// Insert a document row referencing an already-stored file.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStudentDocument,
    ) -> Result<StudentDocument, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_documents (student_id, document_type, file_path, file_name)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentDocument>(&query)
            .bind(input.student_id)
            .bind(&input.document_type)
            .bind(&input.file_path)
            .bind(&input.file_name)
            .fetch_one(pool)
            .await
    }

    /// Find a document by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StudentDocument>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM student_documents WHERE id = $1");
        sqlx::query_as::<_, StudentDocument>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a student's documents, newest first.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<StudentDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM student_documents
             WHERE student_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, StudentDocument>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a document row. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM student_documents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
