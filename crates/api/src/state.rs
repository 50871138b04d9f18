use std::sync::Arc;

use crate::config::ServerConfig;
use crate::uploads::UploadStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: siap_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Attachment file store rooted at the configured upload directory.
    pub uploads: Arc<UploadStore>,
}
