use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait BannerRepository: Send + Sync {
    async fn create(&self, image_url: &str, is_active: bool) -> Result<models::banner::Model, ServiceError>;
    async fn update(&self, id: i32, image_url: &str, is_active: bool) -> Result<Option<models::banner::Model>, ServiceError>;
    async fn list(&self) -> Result<Vec<models::banner::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<models::banner::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmBannerRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl BannerRepository for SeaOrmBannerRepository {
    async fn create(&self, image_url: &str, is_active: bool) -> Result<models::banner::Model, ServiceError> {
        Ok(models::banner::insert(&self.db, image_url, is_active).await?)
    }

    async fn update(&self, id: i32, image_url: &str, is_active: bool) -> Result<Option<models::banner::Model>, ServiceError> {
        Ok(models::banner::update(&self.db, id, image_url, is_active).await?)
    }

    async fn list(&self) -> Result<Vec<models::banner::Model>, ServiceError> {
        Ok(models::banner::list(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<models::banner::Model>, ServiceError> {
        Ok(models::banner::find_by_id(&self.db, id).await?)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        Ok(models::banner::delete_by_id(&self.db, id).await?)
    }
}
