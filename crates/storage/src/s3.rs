use crate::{ObjectStorage, StorageError, UploadedImage};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::{config::Region, types::ObjectCannedAcl, Client as S3Client};
use tracing::debug;
use uuid::Uuid;

/// S3-compatible store (AWS S3, DigitalOcean Spaces, MinIO) fronted by a CDN
/// base URL. The client handle is stateless across calls.
pub struct S3ObjectStorage {
    client: S3Client,
    bucket: String,
    base_url: String,
}

impl S3ObjectStorage {
    pub async fn new(
        access_key_id: String,
        secret_access_key: String,
        endpoint: String,
        region: String,
        bucket: String,
        base_url: String,
    ) -> Self {
        let credentials = aws_sdk_s3::config::Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            "cms-object-storage",
        );

        let config = aws_config::defaults(BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(Region::new(region))
            .endpoint_url(endpoint)
            .load()
            .await;

        Self {
            client: S3Client::new(&config),
            bucket,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn upload(&self, data: &[u8], folder: &str) -> Result<UploadedImage, StorageError> {
        if data.is_empty() {
            return Err(StorageError::EmptyPayload);
        }

        let key = format!("{}/{}", folder, Uuid::new_v4());
        let body = ByteStream::from(data.to_vec());

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(body)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|e| StorageError::Upload(e.to_string()))?;

        debug!(key = %key, bytes = data.len(), "uploaded object");
        Ok(UploadedImage { url: self.public_url(&key), key })
    }
}
