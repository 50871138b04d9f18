//! Attachment file store.
//!
//! Files live under a single configured root directory. Stored paths are
//! always server-generated (`{uuid}{.ext}`); the client-supplied filename is
//! kept only as display metadata, never used as a path component.
//!
//! Mutation ordering for callers: write the file first, then the database
//! row referencing it. A crash between the two leaves at most an orphaned
//! unreferenced file, never a row pointing at a missing file.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::AppError;

/// Maximum length of a sanitized file extension, dot included.
const MAX_EXT_LEN: usize = 10;

/// A file persisted by the store.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Path relative to the store root, as persisted in document rows.
    pub path: String,
    /// Original filename as uploaded, for display only.
    pub file_name: String,
}

/// Filesystem-backed attachment store rooted at one directory.
#[derive(Debug)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute location of a stored path.
    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    /// Persist `bytes` under a freshly generated name and return the stored
    /// path. The uuid-based name makes concurrent uploads collision-free.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<StoredFile, AppError> {
        let generated = format!("{}{}", Uuid::new_v4(), sanitized_extension(original_name));
        let dest = self.resolve(&generated);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;
        tokio::fs::write(&dest, bytes)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

        Ok(StoredFile {
            path: generated,
            file_name: original_name.to_string(),
        })
    }

    /// Delete a stored file. A missing file is treated as already deleted so
    /// cleanup never wedges on a half-finished earlier removal.
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        match tokio::fs::remove_file(self.resolve(path)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path, "attachment file already absent on delete");
                Ok(())
            }
            Err(e) => Err(AppError::InternalError(format!(
                "Failed to delete attachment file: {e}"
            ))),
        }
    }

    /// Best-effort delete used after a database row is already gone; failures
    /// are logged rather than surfaced, since the row removal is the source
    /// of truth and an orphaned file is the preferred failure mode.
    pub async fn delete_best_effort(&self, path: &str) {
        if let Err(e) = self.delete(path).await {
            tracing::warn!(path, error = %e, "failed to remove attachment file");
        }
    }
}

/// Extract a safe extension (dot included) from a client filename.
///
/// Only ASCII alphanumeric extension characters survive; anything else, or
/// an overlong extension, yields an empty string.
fn sanitized_extension(original_name: &str) -> String {
    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    if ext.is_empty()
        || ext.len() + 1 > MAX_EXT_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return String::new();
    }
    format!(".{}", ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_sanitized() {
        assert_eq!(sanitized_extension("report.pdf"), ".pdf");
        assert_eq!(sanitized_extension("photo.JPG"), ".jpg");
        assert_eq!(sanitized_extension("no-extension"), "");
        assert_eq!(sanitized_extension("weird.p/df"), "");
        assert_eq!(sanitized_extension("dots..everywhere.tar.gz"), ".gz");
        assert_eq!(sanitized_extension("too.longextension1"), "");
    }

    #[tokio::test]
    async fn save_generates_fresh_path_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let stored = store.save("../../etc/passwd.pdf", b"content").await.unwrap();

        // The stored path must not echo any part of the client name.
        assert!(!stored.path.contains("passwd"));
        assert!(!stored.path.contains(".."));
        assert!(stored.path.ends_with(".pdf"));
        assert_eq!(stored.file_name, "../../etc/passwd.pdf");

        let on_disk = tokio::fs::read(dir.path().join(&stored.path)).await.unwrap();
        assert_eq!(on_disk, b"content");
    }

    #[tokio::test]
    async fn two_saves_never_collide() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let a = store.save("same.pdf", b"a").await.unwrap();
        let b = store.save("same.pdf", b"b").await.unwrap();
        assert_ne!(a.path, b.path);
    }

    #[tokio::test]
    async fn delete_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let stored = store.save("doc.pdf", b"bytes").await.unwrap();
        store.delete(&stored.path).await.unwrap();
        // Second delete is a no-op, not an error.
        store.delete(&stored.path).await.unwrap();
        store.delete("never-existed.pdf").await.unwrap();
    }
}
