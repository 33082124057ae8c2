use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use crate::entities::product_raw_material::{
    ActiveModel, Column, Entity as ProductRawMaterial, Model,
};
use crate::errors::AppError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Repository for bill-of-materials edges
#[derive(Debug, Clone)]
pub struct ProductRawMaterialRepository {
    base: BaseRepository,
}

impl ProductRawMaterialRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all_in<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, AppError> {
        ProductRawMaterial::find()
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .map_err(AppError::db_error)
    }

    pub async fn find_all(&self) -> Result<Vec<Model>, AppError> {
        Self::find_all_in(self.base.get_db()).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Model>, AppError> {
        ProductRawMaterial::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(AppError::db_error)
    }

    /// Edges whose product reference matches `product_id`
    pub async fn find_by_product(&self, product_id: i32) -> Result<Vec<Model>, AppError> {
        ProductRawMaterial::find()
            .filter(Column::ProductId.eq(product_id))
            .order_by_asc(Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(AppError::db_error)
    }

    pub async fn create(&self, edge: ActiveModel) -> Result<Model, AppError> {
        edge.insert(self.base.get_db())
            .await
            .map_err(AppError::db_error)
    }

    pub async fn update(&self, id: i32, changes: ActiveModel) -> Result<Option<Model>, AppError> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: ActiveModel = existing.into();
        if let ActiveValue::Set(product_id) = changes.product_id {
            active_model.product_id = Set(product_id);
        }
        if let ActiveValue::Set(raw_material_id) = changes.raw_material_id {
            active_model.raw_material_id = Set(raw_material_id);
        }
        if let ActiveValue::Set(quantity_needed) = changes.quantity_needed {
            active_model.quantity_needed = Set(quantity_needed);
        }

        active_model
            .update(self.base.get_db())
            .await
            .map(Some)
            .map_err(AppError::db_error)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = ProductRawMaterial::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(AppError::db_error)?;

        Ok(result.rows_affected > 0)
    }
}

impl Repository for ProductRawMaterialRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
