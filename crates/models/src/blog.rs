use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, DbBackend, QueryOrder, Set, Statement};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Caller-supplied; uniqueness is not enforced here.
    pub slug: String,
    pub image_url: String,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn insert(
    db: &DatabaseConnection,
    title: &str,
    description: &str,
    slug: &str,
    image_url: &str,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        title: Set(title.to_string()),
        description: Set(description.to_string()),
        slug: Set(slug.to_string()),
        image_url: Set(image_url.to_string()),
        is_active: Set(true),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Every blog, newest first.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Published blogs only, newest first.
pub async fn list_active(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .filter(Column::IsActive.eq(true))
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Flip `is_active` in one statement so concurrent toggles cannot lose an
/// intermediate state. No matching id yields `None`.
pub async fn toggle_active(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .from_raw_sql(Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"UPDATE blogs SET is_active = NOT is_active WHERE id = $1 RETURNING *"#,
            [id.into()],
        ))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<(), ModelError> {
    Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(())
}
