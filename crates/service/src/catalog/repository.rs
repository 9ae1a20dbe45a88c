use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, title: &str, description: &str, image_url: &str, points: Vec<String>) -> Result<models::service::Model, ServiceError>;
    async fn list(&self) -> Result<Vec<models::service::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmServiceRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn create(&self, title: &str, description: &str, image_url: &str, points: Vec<String>) -> Result<models::service::Model, ServiceError> {
        Ok(models::service::insert(&self.db, title, description, image_url, points).await?)
    }

    async fn list(&self) -> Result<Vec<models::service::Model>, ServiceError> {
        Ok(models::service::list(&self.db).await?)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        Ok(models::service::delete_by_id(&self.db, id).await?)
    }
}
