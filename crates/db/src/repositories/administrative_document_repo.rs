//! Repository for the `administrative_documents` table.

use siap_core::types::DbId;
use sqlx::PgPool;

use crate::models::administrative_document::{
    AdministrativeDocument, CreateAdministrativeDocument, UpdateAdministrativeDocument,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, document_type, title, description, file_path, file_name, \
                       document_date, status, created_at, updated_at";

/// Provides CRUD operations for administrative documents.
pub struct AdministrativeDocumentRepo;

impl AdministrativeDocumentRepo {
    /// Insert a new document, returning the created row. The status defaults
    /// to 'pending' when absent.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAdministrativeDocument,
    ) -> Result<AdministrativeDocument, sqlx::Error> {
        let query = format!(
            "INSERT INTO administrative_documents
                 (document_type, title, description, file_path, file_name,
                  document_date, status)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'pending'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdministrativeDocument>(&query)
            .bind(&input.document_type)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.file_path)
            .bind(&input.file_name)
            .bind(input.document_date)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a document by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AdministrativeDocument>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM administrative_documents WHERE id = $1");
        sqlx::query_as::<_, AdministrativeDocument>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all documents, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<AdministrativeDocument>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM administrative_documents ORDER BY created_at DESC");
        sqlx::query_as::<_, AdministrativeDocument>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace a document's metadata. File columns are only overwritten when
    /// a replacement file was stored (`file_path`/`file_name` set); `None`
    /// keeps the existing attachment. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAdministrativeDocument,
    ) -> Result<Option<AdministrativeDocument>, sqlx::Error> {
        let query = format!(
            "UPDATE administrative_documents SET
                document_type = $2, title = $3, description = $4,
                file_path = COALESCE($5, file_path),
                file_name = COALESCE($6, file_name),
                document_date = $7,
                status = COALESCE($8, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdministrativeDocument>(&query)
            .bind(id)
            .bind(&input.document_type)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.file_path)
            .bind(&input.file_name)
            .bind(input.document_date)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a document row. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM administrative_documents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
