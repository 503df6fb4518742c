use std::sync::Arc;
use tracing::{debug, info};

use crate::core::error::{AppError, Result};
use crate::features::files::dtos::{
    DownloadUrlResponseDto, FileResponseDto, UploadUrlRequestDto, UploadUrlResponseDto,
};
use crate::features::files::repositories::FileRepository;
use crate::modules::storage::UrlBroker;

/// Service for file metadata and URL brokering
pub struct FileService {
    repository: Arc<dyn FileRepository>,
    broker: Arc<dyn UrlBroker>,
}

impl FileService {
    pub fn new(repository: Arc<dyn FileRepository>, broker: Arc<dyn UrlBroker>) -> Self {
        Self { repository, broker }
    }

    /// List every file record, oldest upload first
    pub async fn list_files(&self) -> Result<Vec<FileResponseDto>> {
        let files = self.repository.list().await?;
        Ok(files.into_iter().map(FileResponseDto::from).collect())
    }

    /// Mint an upload URL for the requested key and record the file
    ///
    /// The URL is minted before the row is written, so a broker failure leaves
    /// the table untouched. The row is written before the client uploads
    /// anything; an abandoned upload leaves a record pointing at a missing
    /// object.
    pub async fn create_upload_url(
        &self,
        request: UploadUrlRequestDto,
    ) -> Result<UploadUrlResponseDto> {
        let content_type = request.content_type();

        info!(
            "Generating upload URL: filename={}, key={}, size={}, content_type={}",
            request.filename, request.key, request.size, content_type
        );

        let presigned = self
            .broker
            .mint_upload_url(&request.key, content_type)
            .await?;

        let file = self.repository.create(request.to_new_file()).await?;

        info!(
            "File metadata saved: id={}, key={}, size={}, url_expires_in={}s",
            file.id, file.key, file.size, presigned.expires_in
        );

        Ok(UploadUrlResponseDto {
            url: presigned.url,
            file: file.into(),
        })
    }

    /// Get a single file record
    pub async fn get_file(&self, id: i32) -> Result<FileResponseDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(FileResponseDto::from)
            .ok_or_else(|| AppError::NotFound("File not found".to_string()))
    }

    /// Mint a download URL for an existing record
    ///
    /// The object itself is not checked; a missing object only surfaces when
    /// the client follows the URL.
    pub async fn create_download_url(&self, id: i32) -> Result<DownloadUrlResponseDto> {
        let file = self.get_file(id).await?;

        let presigned = self.broker.mint_download_url(&file.key).await?;
        debug!(
            "Download URL minted: id={}, key={}, expires_in={}s",
            file.id, file.key, presigned.expires_in
        );

        Ok(DownloadUrlResponseDto { url: presigned.url })
    }

    /// Fails when the metadata store cannot be reached
    pub async fn check_ready(&self) -> Result<()> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{FailingBroker, FakeBroker, InMemoryFileRepository};
    use fake::faker::filesystem::en::FileName;
    use fake::Fake;

    fn upload_request(filename: &str, key: &str) -> UploadUrlRequestDto {
        UploadUrlRequestDto {
            filename: filename.to_string(),
            key: key.to_string(),
            size: "12".to_string(),
            content_type: None,
        }
    }

    fn service_with(repository: Arc<InMemoryFileRepository>) -> FileService {
        FileService::new(repository, Arc::new(FakeBroker::default()))
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let service = service_with(Arc::new(InMemoryFileRepository::default()));

        let files = service.list_files().await.unwrap();

        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_created_file_is_retrievable_and_listed_last() {
        let repository = Arc::new(InMemoryFileRepository::default());
        let service = service_with(repository.clone());

        for _ in 0..3 {
            let name: String = FileName().fake();
            service
                .create_upload_url(upload_request(&name, &format!("uploads/{}", name)))
                .await
                .unwrap();
        }

        let created = service
            .create_upload_url(upload_request("a.txt", "uploads/1-a.txt"))
            .await
            .unwrap();

        let fetched = service.get_file(created.file.id).await.unwrap();
        assert_eq!(fetched.filename, "a.txt");
        assert_eq!(fetched.key, "uploads/1-a.txt");

        let files = service.list_files().await.unwrap();
        assert_eq!(files.len(), 4);
        assert_eq!(files.last().map(|f| f.id), Some(created.file.id));
        assert!(files.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_upload_url_signs_default_content_type() {
        let broker = Arc::new(FakeBroker::default());
        let service =
            FileService::new(Arc::new(InMemoryFileRepository::default()), broker.clone());

        let response = service
            .create_upload_url(upload_request("a.bin", "uploads/a.bin"))
            .await
            .unwrap();

        assert_eq!(
            response.url,
            "https://storage.test/put/uploads/a.bin?content-type=application/octet-stream"
        );
    }

    #[tokio::test]
    async fn test_broker_failure_creates_no_row() {
        let repository = Arc::new(InMemoryFileRepository::default());
        let service = FileService::new(repository.clone(), Arc::new(FailingBroker));

        let err = service
            .create_upload_url(upload_request("a.txt", "uploads/a.txt"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Broker(_)));
        assert_eq!(repository.len(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_keys_are_not_prevented() {
        let repository = Arc::new(InMemoryFileRepository::default());
        let service = service_with(repository.clone());

        let first = service
            .create_upload_url(upload_request("a.txt", "uploads/same"))
            .await
            .unwrap();
        let second = service
            .create_upload_url(upload_request("b.txt", "uploads/same"))
            .await
            .unwrap();

        assert_ne!(first.file.id, second.file.id);
        assert_eq!(first.url, second.url);
        assert_eq!(repository.len(), 2);
    }

    #[tokio::test]
    async fn test_download_url_for_unknown_id_is_not_found() {
        let service = service_with(Arc::new(InMemoryFileRepository::default()));

        let err = service.create_download_url(999_999).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_download_url_uses_record_key() {
        let service = service_with(Arc::new(InMemoryFileRepository::default()));
        let created = service
            .create_upload_url(upload_request("a.txt", "uploads/1-a.txt"))
            .await
            .unwrap();

        let response = service.create_download_url(created.file.id).await.unwrap();

        assert_eq!(
            response.url,
            "https://storage.test/get/uploads/1-a.txt?response-content-disposition=attachment"
        );
    }
}
