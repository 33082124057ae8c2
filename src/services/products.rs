use std::sync::Arc;

use sea_orm::{DatabaseConnection, Set};
use tracing::{info, instrument};

use crate::{
    entities::product,
    errors::ServiceError,
    repositories::ProductRepository,
};

/// Fields a caller may set on a product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub code: String,
    pub name: String,
    pub value: f64,
}

impl ProductInput {
    fn into_active_model(self) -> product::ActiveModel {
        product::ActiveModel {
            code: Set(self.code),
            name: Set(self.name),
            value: Set(self.value),
            ..Default::default()
        }
    }
}

/// Service for managing finished products
#[derive(Clone)]
pub struct ProductService {
    repository: ProductRepository,
}

impl ProductService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: ProductRepository::new(db),
        }
    }

    /// All products ordered by id
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<product::Model>, ServiceError> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        self.repository.find_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, input: ProductInput) -> Result<product::Model, ServiceError> {
        let created = self.repository.create(input.into_active_model()).await?;
        info!(product_id = created.id, code = %created.code, "Product created");
        Ok(created)
    }

    /// Replaces code, name and value. `None` when no product has `id`.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: i32,
        input: ProductInput,
    ) -> Result<Option<product::Model>, ServiceError> {
        let updated = self.repository.update(id, input.into_active_model()).await?;
        if updated.is_some() {
            info!(product_id = id, "Product updated");
        }
        Ok(updated)
    }

    /// Returns false when nothing was deleted
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            info!(product_id = id, "Product deleted");
        }
        Ok(deleted)
    }
}
