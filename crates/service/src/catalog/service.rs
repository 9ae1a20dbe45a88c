use std::sync::Arc;
use tracing::{info, instrument};

use storage::ObjectStorage;

use crate::catalog::repository::ServiceRepository;
use crate::errors::ServiceError;
use crate::points::{self, PointsInput};

const FOLDER: &str = "services";

/// Manages rows of the `services` table: validate, upload, normalize the
/// points list, insert.
pub struct ServiceCatalog {
    repo: Arc<dyn ServiceRepository>,
    storage: Arc<dyn ObjectStorage>,
}

impl ServiceCatalog {
    pub fn new(repo: Arc<dyn ServiceRepository>, storage: Arc<dyn ObjectStorage>) -> Self {
        Self { repo, storage }
    }

    #[instrument(skip(self, image, points), fields(title = %title))]
    pub async fn create(
        &self,
        title: &str,
        description: &str,
        points: PointsInput,
        image: Option<&[u8]>,
    ) -> Result<models::service::Model, ServiceError> {
        if title.trim().is_empty() {
            return Err(ServiceError::Validation("title is required".into()));
        }
        if description.trim().is_empty() {
            return Err(ServiceError::Validation("description is required".into()));
        }
        let data = image.ok_or_else(|| ServiceError::Validation("Service image is required".into()))?;

        let uploaded = self.storage.upload(data, FOLDER).await?;
        let points = points::normalize(points);
        let created = self.repo.create(title, description, &uploaded.url, points).await?;
        info!(id = created.id, url = %created.image_url, "created service");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<models::service::Model>, ServiceError> {
        self.repo.list().await
    }

    /// Unconditional; the stored object is intentionally left in place.
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(id, "deleted service");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryServiceRepository;
    use storage::MockObjectStorage;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn create_normalizes_comma_separated_points() {
        let repo = Arc::new(MemoryServiceRepository::new());
        let storage = Arc::new(MockObjectStorage::new());
        let svc = ServiceCatalog::new(repo.clone(), storage.clone());

        let created = svc
            .create(
                "Branding",
                "Identity work",
                PointsInput::Text("logo, palette ,voice".into()),
                Some(b"img"),
            )
            .await
            .unwrap();
        assert_eq!(created.points, strings(&["logo", "palette", "voice"]));
        assert!(created.image_url.starts_with("https://mock-cdn.example.com/services/"));
    }

    #[tokio::test]
    async fn create_accepts_a_json_encoded_points_list() {
        let repo = Arc::new(MemoryServiceRepository::new());
        let storage = Arc::new(MockObjectStorage::new());
        let svc = ServiceCatalog::new(repo, storage);

        let created = svc
            .create(
                "SEO",
                "Search visibility",
                PointsInput::Text(r#"["audit","keywords"]"#.into()),
                Some(b"img"),
            )
            .await
            .unwrap();
        assert_eq!(created.points, strings(&["audit", "keywords"]));
    }

    #[tokio::test]
    async fn create_with_no_points_stores_an_empty_list() {
        let repo = Arc::new(MemoryServiceRepository::new());
        let storage = Arc::new(MockObjectStorage::new());
        let svc = ServiceCatalog::new(repo, storage);

        let created = svc
            .create("Hosting", "Managed infra", PointsInput::Absent, Some(b"img"))
            .await
            .unwrap();
        assert!(created.points.is_empty());
    }

    #[tokio::test]
    async fn create_without_image_touches_nothing() {
        let repo = Arc::new(MemoryServiceRepository::new());
        let storage = Arc::new(MockObjectStorage::new());
        let svc = ServiceCatalog::new(repo.clone(), storage.clone());

        let err = svc
            .create("Branding", "Identity work", PointsInput::Absent, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(storage.upload_count(), 0);
        assert_eq!(repo.writes_attempted(), 0);
    }

    #[tokio::test]
    async fn blank_title_fails_before_any_upload() {
        let repo = Arc::new(MemoryServiceRepository::new());
        let storage = Arc::new(MockObjectStorage::new());
        let svc = ServiceCatalog::new(repo.clone(), storage.clone());

        let err = svc
            .create("  ", "Identity work", PointsInput::Absent, Some(b"img"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(storage.upload_count(), 0);
    }

    #[tokio::test]
    async fn failed_upload_prevents_the_relational_write() {
        let repo = Arc::new(MemoryServiceRepository::new());
        let storage = Arc::new(MockObjectStorage::new());
        storage.set_failing(true);
        let svc = ServiceCatalog::new(repo.clone(), storage);

        let err = svc
            .create("Branding", "Identity work", PointsInput::Absent, Some(b"img"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Upload(_)));
        assert_eq!(repo.writes_attempted(), 0);
    }
}
