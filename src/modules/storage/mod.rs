//! Object storage URL brokering
//!
//! The server never moves file bytes. It hands out short-lived pre-signed URLs
//! and the client talks to the object store directly.

mod s3_broker;

use async_trait::async_trait;

use crate::core::error::AppError;

pub use s3_broker::S3UrlBroker;

/// Lifetime of every minted URL (1 hour). Not configurable per request.
pub const PRESIGNED_URL_EXPIRY_SECS: u32 = 3600;

/// A capability URL and how long it stays valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignedUrl {
    pub url: String,
    pub expires_in: u32,
}

impl PresignedUrl {
    pub fn new(url: String) -> Self {
        Self {
            url,
            expires_in: PRESIGNED_URL_EXPIRY_SECS,
        }
    }
}

/// Mints pre-signed object storage URLs
///
/// Implementations must not check whether the object exists; a download URL for
/// a missing key only fails when the client uses it.
#[async_trait]
pub trait UrlBroker: Send + Sync {
    /// URL for a single PUT of `key` with the given `Content-Type`
    async fn mint_upload_url(
        &self,
        key: &str,
        content_type: &str,
    ) -> Result<PresignedUrl, AppError>;

    /// URL for a GET of `key` that the browser saves as an attachment
    async fn mint_download_url(&self, key: &str) -> Result<PresignedUrl, AppError>;
}
