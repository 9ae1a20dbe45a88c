//! Remote object storage behind a uniform async contract.
//!
//! Uploads are a single attempt: the call either resolves with a durable,
//! publicly resolvable URL or fails. Nothing here retries or cleans up
//! partial remote state; callers sequence their own work around the result.

use async_trait::async_trait;
use thiserror::Error;

pub mod mock;
pub mod s3;

pub use mock::MockObjectStorage;
pub use s3::S3ObjectStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("empty upload payload")]
    EmptyPayload,
    #[error("remote upload failed: {0}")]
    Upload(String),
}

/// A durably stored object and where it resolves publicly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub url: String,
    pub key: String,
}

/// Streams a buffered payload out to the remote store.
///
/// `folder` is a logical namespace hint ("banners", "services", ...) with no
/// structural validation. Implementations must be safe to call concurrently
/// for unrelated uploads.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn upload(&self, data: &[u8], folder: &str) -> Result<UploadedImage, StorageError>;
}
