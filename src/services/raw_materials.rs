use std::sync::Arc;

use sea_orm::{DatabaseConnection, Set};
use tracing::{info, instrument};

use crate::{
    entities::raw_material,
    errors::ServiceError,
    repositories::RawMaterialRepository,
};

/// Fields a caller may set on a raw material
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMaterialInput {
    pub code: String,
    pub name: String,
    pub quantity_in_stock: i32,
}

impl RawMaterialInput {
    fn into_active_model(self) -> raw_material::ActiveModel {
        raw_material::ActiveModel {
            code: Set(self.code),
            name: Set(self.name),
            quantity_in_stock: Set(self.quantity_in_stock),
            ..Default::default()
        }
    }
}

/// Service for managing raw materials and their stock levels
#[derive(Clone)]
pub struct RawMaterialService {
    repository: RawMaterialRepository,
}

impl RawMaterialService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: RawMaterialRepository::new(db),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_raw_materials(&self) -> Result<Vec<raw_material::Model>, ServiceError> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_raw_material(
        &self,
        id: i32,
    ) -> Result<Option<raw_material::Model>, ServiceError> {
        self.repository.find_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn create_raw_material(
        &self,
        input: RawMaterialInput,
    ) -> Result<raw_material::Model, ServiceError> {
        let created = self.repository.create(input.into_active_model()).await?;
        info!(
            raw_material_id = created.id,
            code = %created.code,
            quantity_in_stock = created.quantity_in_stock,
            "Raw material created"
        );
        Ok(created)
    }

    /// Stock changes go through here; there is no separate adjustment path.
    #[instrument(skip(self))]
    pub async fn update_raw_material(
        &self,
        id: i32,
        input: RawMaterialInput,
    ) -> Result<Option<raw_material::Model>, ServiceError> {
        let updated = self.repository.update(id, input.into_active_model()).await?;
        if let Some(material) = &updated {
            info!(
                raw_material_id = id,
                quantity_in_stock = material.quantity_in_stock,
                "Raw material updated"
            );
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_raw_material(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            info!(raw_material_id = id, "Raw material deleted");
        }
        Ok(deleted)
    }
}
