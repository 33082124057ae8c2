use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use crate::entities::raw_material::{ActiveModel, Column, Entity as RawMaterial, Model};
use crate::errors::AppError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Repository for raw material operations
#[derive(Debug, Clone)]
pub struct RawMaterialRepository {
    base: BaseRepository,
}

impl RawMaterialRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all_in<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, AppError> {
        RawMaterial::find()
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .map_err(AppError::db_error)
    }

    pub async fn find_all(&self) -> Result<Vec<Model>, AppError> {
        Self::find_all_in(self.base.get_db()).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Model>, AppError> {
        RawMaterial::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(AppError::db_error)
    }

    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Model>, AppError> {
        RawMaterial::find()
            .filter(Column::Id.is_in(ids))
            .all(self.base.get_db())
            .await
            .map_err(AppError::db_error)
    }

    pub async fn create(&self, raw_material: ActiveModel) -> Result<Model, AppError> {
        raw_material
            .insert(self.base.get_db())
            .await
            .map_err(AppError::db_error)
    }

    /// Copies every `Set` field of `changes` onto the stored row.
    /// Returns `None` when no raw material has this id.
    pub async fn update(&self, id: i32, changes: ActiveModel) -> Result<Option<Model>, AppError> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: ActiveModel = existing.into();
        if let ActiveValue::Set(code) = changes.code {
            active_model.code = Set(code);
        }
        if let ActiveValue::Set(name) = changes.name {
            active_model.name = Set(name);
        }
        if let ActiveValue::Set(quantity) = changes.quantity_in_stock {
            active_model.quantity_in_stock = Set(quantity);
        }

        active_model
            .update(self.base.get_db())
            .await
            .map(Some)
            .map_err(AppError::db_error)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = RawMaterial::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(AppError::db_error)?;

        Ok(result.rows_affected > 0)
    }
}

impl Repository for RawMaterialRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
