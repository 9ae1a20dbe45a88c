use std::sync::Arc;
use tracing::{info, instrument};

use storage::ObjectStorage;

use crate::banner::repository::BannerRepository;
use crate::errors::ServiceError;

const FOLDER: &str = "banners";

/// Orchestrates banner mutations: upload first, then the relational write.
/// A failed upload aborts the request before any row is touched; a failed
/// write after a successful upload leaves the remote object behind and
/// surfaces the error.
pub struct BannerService {
    repo: Arc<dyn BannerRepository>,
    storage: Arc<dyn ObjectStorage>,
}

impl BannerService {
    pub fn new(repo: Arc<dyn BannerRepository>, storage: Arc<dyn ObjectStorage>) -> Self {
        Self { repo, storage }
    }

    /// Create from an uploaded image; the image is mandatory.
    #[instrument(skip(self, image))]
    pub async fn create(&self, image: Option<&[u8]>) -> Result<models::banner::Model, ServiceError> {
        let data = image.ok_or_else(|| ServiceError::Validation("Image is required".into()))?;

        let uploaded = self.storage.upload(data, FOLDER).await?;
        let created = self.repo.create(&uploaded.url, true).await?;
        info!(id = created.id, url = %created.image_url, "created banner");
        Ok(created)
    }

    /// Replace the image when a new file is present; otherwise the caller
    /// must resend the current `image_url`, which is written back verbatim.
    #[instrument(skip(self, image, image_url))]
    pub async fn update(
        &self,
        id: i32,
        is_active: bool,
        image_url: Option<&str>,
        image: Option<&[u8]>,
    ) -> Result<Option<models::banner::Model>, ServiceError> {
        let url = match image {
            Some(data) => self.storage.upload(data, FOLDER).await?.url,
            None => image_url
                .ok_or_else(|| {
                    ServiceError::Validation("image_url is required when no new image is uploaded".into())
                })?
                .to_string(),
        };

        let updated = self.repo.update(id, &url, is_active).await?;
        match &updated {
            Some(b) => info!(id = b.id, url = %b.image_url, "updated banner"),
            None => info!(id, "banner update matched no row"),
        }
        Ok(updated)
    }

    pub async fn list(&self) -> Result<Vec<models::banner::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<models::banner::Model>, ServiceError> {
        self.repo.get(id).await
    }

    /// Unconditional; the stored object is intentionally left in place.
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(id, "deleted banner");
        Ok(())
    }
}
