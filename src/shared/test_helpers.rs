//! In-process substitutes for the metadata store and URL broker

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

use crate::core::error::{AppError, Result};
use crate::features::files::models::{FileRecord, NewFile};
use crate::features::files::repositories::FileRepository;
use crate::modules::storage::{PresignedUrl, UrlBroker};

/// `FileRepository` kept in a vector; ids start at 1 like a SERIAL column
#[derive(Default)]
pub struct InMemoryFileRepository {
    files: Mutex<Vec<FileRecord>>,
}

impl InMemoryFileRepository {
    pub fn len(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

#[async_trait]
impl FileRepository for InMemoryFileRepository {
    async fn list(&self) -> Result<Vec<FileRecord>> {
        let mut files = self.files.lock().unwrap().clone();
        files.sort_by(|a, b| a.uploaded_at.cmp(&b.uploaded_at).then(a.id.cmp(&b.id)));
        Ok(files)
    }

    async fn create(&self, file: NewFile) -> Result<FileRecord> {
        let mut files = self.files.lock().unwrap();
        let record = FileRecord {
            id: files.len() as i32 + 1,
            filename: file.filename,
            key: file.key,
            size: file.size,
            uploaded_at: Utc::now(),
        };
        files.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<FileRecord>> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id == id)
            .cloned())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// `FileRepository` whose every call fails like an unreachable database
pub struct UnavailableFileRepository;

#[async_trait]
impl FileRepository for UnavailableFileRepository {
    async fn list(&self) -> Result<Vec<FileRecord>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn create(&self, _file: NewFile) -> Result<FileRecord> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<FileRecord>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<()> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Deterministic broker: the URL spells out method, key and signed parameters
#[derive(Default)]
pub struct FakeBroker;

#[async_trait]
impl UrlBroker for FakeBroker {
    async fn mint_upload_url(&self, key: &str, content_type: &str) -> Result<PresignedUrl> {
        Ok(PresignedUrl::new(format!(
            "https://storage.test/put/{}?content-type={}",
            key, content_type
        )))
    }

    async fn mint_download_url(&self, key: &str) -> Result<PresignedUrl> {
        Ok(PresignedUrl::new(format!(
            "https://storage.test/get/{}?response-content-disposition=attachment",
            key
        )))
    }
}

/// Broker that fails like misconfigured credentials
pub struct FailingBroker;

#[async_trait]
impl UrlBroker for FailingBroker {
    async fn mint_upload_url(&self, _key: &str, _content_type: &str) -> Result<PresignedUrl> {
        Err(AppError::Broker("InvalidAccessKeyId".to_string()))
    }

    async fn mint_download_url(&self, _key: &str) -> Result<PresignedUrl> {
        Err(AppError::Broker("InvalidAccessKeyId".to_string()))
    }
}
