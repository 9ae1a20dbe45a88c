use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn create(&self, title: &str, description: &str, slug: &str, image_url: &str) -> Result<models::blog::Model, ServiceError>;
    async fn list_all(&self) -> Result<Vec<models::blog::Model>, ServiceError>;
    async fn list_active(&self) -> Result<Vec<models::blog::Model>, ServiceError>;
    async fn toggle(&self, id: i32) -> Result<Option<models::blog::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmBlogRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl BlogRepository for SeaOrmBlogRepository {
    async fn create(&self, title: &str, description: &str, slug: &str, image_url: &str) -> Result<models::blog::Model, ServiceError> {
        Ok(models::blog::insert(&self.db, title, description, slug, image_url).await?)
    }

    async fn list_all(&self) -> Result<Vec<models::blog::Model>, ServiceError> {
        Ok(models::blog::list_all(&self.db).await?)
    }

    async fn list_active(&self) -> Result<Vec<models::blog::Model>, ServiceError> {
        Ok(models::blog::list_active(&self.db).await?)
    }

    async fn toggle(&self, id: i32) -> Result<Option<models::blog::Model>, ServiceError> {
        Ok(models::blog::toggle_active(&self.db, id).await?)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        Ok(models::blog::delete_by_id(&self.db, id).await?)
    }
}
