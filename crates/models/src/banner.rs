use sea_orm::{entity::prelude::*, DatabaseConnection, DbBackend, QueryOrder, Set, Statement};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "banners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub image_url: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn insert(db: &DatabaseConnection, image_url: &str, is_active: bool) -> Result<Model, ModelError> {
    let am = ActiveModel {
        image_url: Set(image_url.to_string()),
        is_active: Set(is_active),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Single-statement update returning the new row. No matching id yields
/// `None` rather than an error.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    image_url: &str,
    is_active: bool,
) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .from_raw_sql(Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"UPDATE banners SET image_url = $1, is_active = $2 WHERE id = $3 RETURNING *"#,
            [image_url.into(), is_active.into(), id.into()],
        ))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Newest first.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_desc(Column::Id)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Unconditional delete; removing an absent id is not an error.
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<(), ModelError> {
    Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(())
}
