use utoipa::{Modify, OpenApi};

use crate::features::files::{dtos as files_dtos, handlers as files_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        files_handlers::list_files,
        files_handlers::request_upload_url,
        files_handlers::request_download_url,
    ),
    components(
        schemas(
            ErrorResponse,
            files_dtos::UploadUrlRequestDto,
            files_dtos::UploadUrlResponseDto,
            files_dtos::DownloadUrlResponseDto,
            files_dtos::FileResponseDto,
        )
    ),
    tags(
        (name = "files", description = "File metadata and pre-signed transfer URLs"),
    ),
    info(
        title = "File Broker API",
        version = "0.1.0",
        description = "Pre-signed upload and download URLs for stored files",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
