use axum::http::HeaderValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::features::files::models::{FileRecord, NewFile};
use crate::shared::validation::NUMERIC_STRING_REGEX;

/// Content type signed into upload URLs when the client sends none
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Request DTO for minting an upload URL
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequestDto {
    /// Original file name chosen by the uploader
    #[schema(example = "a.txt")]
    #[validate(length(min = 1, message = "filename is required"))]
    pub filename: String,

    /// Object key the bytes will be stored under
    #[schema(example = "uploads/1700000000000-a.txt")]
    #[validate(length(min = 1, message = "key is required"))]
    pub key: String,

    /// Declared size in bytes, as a decimal string
    #[schema(example = "12")]
    #[validate(regex(path = *NUMERIC_STRING_REGEX, message = "size must be a decimal byte count"))]
    pub size: String,

    /// MIME type the upload will be sent with
    #[schema(example = "text/plain")]
    #[serde(default)]
    #[validate(custom(
        function = "validate_content_type",
        message = "contentType must be a valid header value"
    ))]
    pub content_type: Option<String>,
}

/// The content type is signed into the upload URL as a header, so it must be
/// visible ASCII
fn validate_content_type(content_type: &str) -> Result<(), ValidationError> {
    HeaderValue::from_str(content_type)
        .map(|_| ())
        .map_err(|_| ValidationError::new("content_type"))
}

impl UploadUrlRequestDto {
    /// Declared content type, or [`DEFAULT_CONTENT_TYPE`] when absent or blank
    pub fn content_type(&self) -> &str {
        self.content_type
            .as_deref()
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    pub fn to_new_file(&self) -> NewFile {
        NewFile {
            filename: self.filename.clone(),
            key: self.key.clone(),
            size: self.size.clone(),
        }
    }
}

/// Response DTO for a stored file record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileResponseDto {
    pub id: i32,
    pub filename: String,
    pub key: String,
    /// Declared size in bytes, as sent at upload time
    pub size: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<FileRecord> for FileResponseDto {
    fn from(file: FileRecord) -> Self {
        Self {
            id: file.id,
            filename: file.filename,
            key: file.key,
            size: file.size,
            uploaded_at: file.uploaded_at,
        }
    }
}

/// Response DTO for an upload URL request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadUrlResponseDto {
    /// Pre-signed PUT URL, valid for one hour
    pub url: String,
    /// The record created for this upload
    pub file: FileResponseDto,
}

/// Response DTO for a download URL request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DownloadUrlResponseDto {
    /// Pre-signed GET URL, valid for one hour
    pub url: String,
}
