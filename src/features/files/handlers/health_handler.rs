use axum::{extract::State, http::StatusCode};
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::files::services::FileService;

/// Liveness probe
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe: the metadata store must answer
pub async fn readiness_check(State(service): State<Arc<FileService>>) -> Result<StatusCode> {
    service.check_ready().await.map_err(|e| {
        tracing::warn!("Readiness check failed: {}", e);
        AppError::ServiceUnavailable("Database unavailable".to_string())
    })?;
    Ok(StatusCode::OK)
}
