use std::sync::Arc;
use tracing::{info, instrument};

use storage::ObjectStorage;

use crate::blog::repository::BlogRepository;
use crate::errors::ServiceError;

const FOLDER: &str = "blogs";

pub struct BlogService {
    repo: Arc<dyn BlogRepository>,
    storage: Arc<dyn ObjectStorage>,
}

impl BlogService {
    pub fn new(repo: Arc<dyn BlogRepository>, storage: Arc<dyn ObjectStorage>) -> Self {
        Self { repo, storage }
    }

    #[instrument(skip(self, image), fields(title = %title, slug = %slug))]
    pub async fn create(
        &self,
        title: &str,
        description: &str,
        slug: &str,
        image: Option<&[u8]>,
    ) -> Result<models::blog::Model, ServiceError> {
        if title.trim().is_empty() {
            return Err(ServiceError::Validation("title is required".into()));
        }
        if description.trim().is_empty() {
            return Err(ServiceError::Validation("description is required".into()));
        }
        if slug.trim().is_empty() {
            return Err(ServiceError::Validation("slug is required".into()));
        }
        let data = image.ok_or_else(|| ServiceError::Validation("Blog image is required".into()))?;

        let uploaded = self.storage.upload(data, FOLDER).await?;
        let created = self.repo.create(title, description, slug, &uploaded.url).await?;
        info!(id = created.id, slug = %created.slug, "created blog");
        Ok(created)
    }

    /// Full listing for the admin surface.
    pub async fn list_all(&self) -> Result<Vec<models::blog::Model>, ServiceError> {
        self.repo.list_all().await
    }

    /// Published-only listing for the public surface.
    pub async fn list_active(&self) -> Result<Vec<models::blog::Model>, ServiceError> {
        self.repo.list_active().await
    }

    /// Atomic flip at the store; two toggles restore the original state.
    pub async fn toggle(&self, id: i32) -> Result<models::blog::Model, ServiceError> {
        let toggled = self
            .repo
            .toggle(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Blog"))?;
        info!(id = toggled.id, is_active = toggled.is_active, "toggled blog");
        Ok(toggled)
    }

    /// Unconditional; the stored object is intentionally left in place.
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(id, "deleted blog");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBlogRepository;
    use storage::MockObjectStorage;

    fn service_with(repo: Arc<MemoryBlogRepository>, storage: Arc<MockObjectStorage>) -> BlogService {
        BlogService::new(repo, storage)
    }

    #[tokio::test]
    async fn create_stores_the_uploaded_url_and_starts_active() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let storage = Arc::new(MockObjectStorage::new());
        let svc = service_with(repo.clone(), storage.clone());

        let created = svc
            .create("Launch notes", "What shipped", "launch-notes", Some(b"img"))
            .await
            .unwrap();
        assert!(created.image_url.starts_with("https://mock-cdn.example.com/blogs/"));
        assert!(created.is_active);
        assert_eq!(created.slug, "launch-notes");
    }

    #[tokio::test]
    async fn create_without_image_touches_nothing() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let storage = Arc::new(MockObjectStorage::new());
        let svc = service_with(repo.clone(), storage.clone());

        let err = svc
            .create("Launch notes", "What shipped", "launch-notes", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(storage.upload_count(), 0);
        assert_eq!(repo.writes_attempted(), 0);
    }

    #[tokio::test]
    async fn toggle_twice_restores_the_original_state() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let storage = Arc::new(MockObjectStorage::new());
        let svc = service_with(repo.clone(), storage.clone());

        let created = svc
            .create("Launch notes", "What shipped", "launch-notes", Some(b"img"))
            .await
            .unwrap();

        let once = svc.toggle(created.id).await.unwrap();
        assert!(!once.is_active);
        let twice = svc.toggle(created.id).await.unwrap();
        assert_eq!(twice.is_active, created.is_active);
    }

    #[tokio::test]
    async fn toggle_of_a_missing_blog_is_not_found() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let storage = Arc::new(MockObjectStorage::new());
        let svc = service_with(repo, storage);

        let err = svc.toggle(77).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn listings_split_public_and_admin_views() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let storage = Arc::new(MockObjectStorage::new());
        let svc = service_with(repo, storage);

        let visible = svc.create("Visible", "published", "visible", Some(b"a")).await.unwrap();
        let hidden = svc.create("Hidden", "unpublished", "hidden", Some(b"b")).await.unwrap();
        svc.toggle(hidden.id).await.unwrap();

        let active = svc.list_active().await.unwrap();
        assert!(active.iter().any(|b| b.id == visible.id));
        assert!(!active.iter().any(|b| b.id == hidden.id));

        let all = svc.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        for pair in all.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at, "newest first");
        }
    }
}
