use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

use crate::features::files::handlers;
use crate::features::files::services::FileService;

/// Create routes for the files feature
pub fn routes(file_service: Arc<FileService>) -> Router {
    Router::new()
        .route("/api/files", get(handlers::list_files))
        .route("/api/files/upload-url", post(handlers::request_upload_url))
        .route("/api/files/{id}/download", get(handlers::request_download_url))
        .with_state(file_service)
}

/// Liveness and readiness probes
pub fn health_routes(file_service: Arc<FileService>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/health/ready", get(handlers::readiness_check))
        .with_state(file_service)
}
