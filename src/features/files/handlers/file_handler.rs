use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::extractor::ValidatedJson;
use crate::features::files::dtos::{
    DownloadUrlResponseDto, FileResponseDto, UploadUrlRequestDto, UploadUrlResponseDto,
};
use crate::features::files::services::FileService;
use crate::shared::types::ErrorResponse;

/// List all files
///
/// Returns every file record ordered by upload time, oldest first.
#[utoipa::path(
    get,
    path = "/api/files",
    tag = "files",
    responses(
        (status = 200, description = "File records, oldest first", body = Vec<FileResponseDto>),
        (status = 500, description = "Metadata store unavailable", body = ErrorResponse)
    )
)]
pub async fn list_files(
    State(service): State<Arc<FileService>>,
) -> Result<Json<Vec<FileResponseDto>>> {
    let files = service
        .list_files()
        .await
        .map_err(|e| e.with_public_message("Failed to get files"))?;
    Ok(Json(files))
}

/// Request an upload URL
///
/// Records the file and returns a pre-signed PUT URL. The client uploads the
/// bytes directly to object storage with the same `Content-Type`.
#[utoipa::path(
    post,
    path = "/api/files/upload-url",
    tag = "files",
    request_body = UploadUrlRequestDto,
    responses(
        (status = 200, description = "Upload URL minted and file recorded", body = UploadUrlResponseDto),
        (status = 400, description = "Invalid file data", body = ErrorResponse),
        (status = 500, description = "Storage or database failure", body = ErrorResponse)
    )
)]
pub async fn request_upload_url(
    State(service): State<Arc<FileService>>,
    ValidatedJson(dto): ValidatedJson<UploadUrlRequestDto>,
) -> Result<Json<UploadUrlResponseDto>> {
    let response = service
        .create_upload_url(dto)
        .await
        .map_err(|e| e.with_public_message("Failed to generate upload URL"))?;
    Ok(Json(response))
}

/// Request a download URL
///
/// Returns a pre-signed GET URL that makes the browser save the file.
#[utoipa::path(
    get,
    path = "/api/files/{id}/download",
    tag = "files",
    params(
        ("id" = i32, Path, description = "File id")
    ),
    responses(
        (status = 200, description = "Download URL minted", body = DownloadUrlResponseDto),
        (status = 404, description = "File not found", body = ErrorResponse),
        (status = 500, description = "Storage or database failure", body = ErrorResponse)
    )
)]
pub async fn request_download_url(
    State(service): State<Arc<FileService>>,
    Path(id): Path<String>,
) -> Result<Json<DownloadUrlResponseDto>> {
    // A non-numeric id can never match a row
    let id = id
        .parse::<i32>()
        .map_err(|_| AppError::NotFound("File not found".to_string()))?;

    let response = service
        .create_download_url(id)
        .await
        .map_err(|e| e.with_public_message("Failed to generate download URL"))?;
    Ok(Json(response))
}
