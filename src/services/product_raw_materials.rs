use std::{collections::HashMap, sync::Arc};

use sea_orm::{DatabaseConnection, Set};
use serde::Serialize;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

use crate::{
    entities::{product, product_raw_material, raw_material},
    errors::ServiceError,
    repositories::{ProductRawMaterialRepository, ProductRepository, RawMaterialRepository},
};

pub const MISSING_REFERENCE_MESSAGE: &str = "Product or RawMaterial not found";

/// Requirement edge with both ends resolved
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = ProductRawMaterial)]
pub struct ProductRawMaterialDetails {
    pub id: i32,
    pub product: product::Model,
    pub raw_material: raw_material::Model,
    pub quantity_needed: i32,
}

/// Requested edge contents. Missing references are reported the same way as
/// references to rows that do not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRawMaterialInput {
    pub product_id: Option<i32>,
    pub raw_material_id: Option<i32>,
    pub quantity_needed: i32,
}

/// Service for the bill-of-materials edges between products and raw materials
#[derive(Clone)]
pub struct ProductRawMaterialService {
    repository: ProductRawMaterialRepository,
    products: ProductRepository,
    raw_materials: RawMaterialRepository,
}

impl ProductRawMaterialService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: ProductRawMaterialRepository::new(db.clone()),
            products: ProductRepository::new(db.clone()),
            raw_materials: RawMaterialRepository::new(db),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_product_raw_materials(
        &self,
    ) -> Result<Vec<ProductRawMaterialDetails>, ServiceError> {
        let edges = self.repository.find_all().await?;
        self.resolve_all(edges).await
    }

    #[instrument(skip(self))]
    pub async fn get_product_raw_material(
        &self,
        id: i32,
    ) -> Result<Option<ProductRawMaterialDetails>, ServiceError> {
        match self.repository.find_by_id(id).await? {
            Some(edge) => Ok(self.resolve_all(vec![edge]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Edges of one product; empty when the product has none or does not exist.
    #[instrument(skip(self))]
    pub async fn list_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<ProductRawMaterialDetails>, ServiceError> {
        let edges = self.repository.find_by_product(product_id).await?;
        self.resolve_all(edges).await
    }

    #[instrument(skip(self))]
    pub async fn create_product_raw_material(
        &self,
        input: ProductRawMaterialInput,
    ) -> Result<ProductRawMaterialDetails, ServiceError> {
        let (product, raw_material) = self.resolve_references(&input).await?;

        let created = self
            .repository
            .create(product_raw_material::ActiveModel {
                product_id: Set(product.id),
                raw_material_id: Set(raw_material.id),
                quantity_needed: Set(input.quantity_needed),
                ..Default::default()
            })
            .await?;

        info!(
            product_raw_material_id = created.id,
            product_id = product.id,
            raw_material_id = raw_material.id,
            quantity_needed = created.quantity_needed,
            "Product raw material created"
        );

        Ok(ProductRawMaterialDetails {
            id: created.id,
            product,
            raw_material,
            quantity_needed: created.quantity_needed,
        })
    }

    /// `None` when the edge does not exist; that check comes before the
    /// reference check.
    #[instrument(skip(self))]
    pub async fn update_product_raw_material(
        &self,
        id: i32,
        input: ProductRawMaterialInput,
    ) -> Result<Option<ProductRawMaterialDetails>, ServiceError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let (product, raw_material) = self.resolve_references(&input).await?;

        let Some(updated) = self
            .repository
            .update(
                id,
                product_raw_material::ActiveModel {
                    product_id: Set(product.id),
                    raw_material_id: Set(raw_material.id),
                    quantity_needed: Set(input.quantity_needed),
                    ..Default::default()
                },
            )
            .await?
        else {
            return Ok(None);
        };

        info!(product_raw_material_id = id, "Product raw material updated");

        Ok(Some(ProductRawMaterialDetails {
            id: updated.id,
            product,
            raw_material,
            quantity_needed: updated.quantity_needed,
        }))
    }

    #[instrument(skip(self))]
    pub async fn delete_product_raw_material(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            info!(product_raw_material_id = id, "Product raw material deleted");
        }
        Ok(deleted)
    }

    async fn resolve_references(
        &self,
        input: &ProductRawMaterialInput,
    ) -> Result<(product::Model, raw_material::Model), ServiceError> {
        let missing = || ServiceError::BadRequest(MISSING_REFERENCE_MESSAGE.to_string());

        let (Some(product_id), Some(raw_material_id)) = (input.product_id, input.raw_material_id)
        else {
            return Err(missing());
        };

        let product = self.products.find_by_id(product_id).await?;
        let raw_material = self.raw_materials.find_by_id(raw_material_id).await?;

        match (product, raw_material) {
            (Some(product), Some(raw_material)) => Ok((product, raw_material)),
            _ => Err(missing()),
        }
    }

    /// Attaches products and raw materials with two batched lookups.
    async fn resolve_all(
        &self,
        edges: Vec<product_raw_material::Model>,
    ) -> Result<Vec<ProductRawMaterialDetails>, ServiceError> {
        if edges.is_empty() {
            return Ok(Vec::new());
        }

        let mut product_ids: Vec<i32> = edges.iter().map(|edge| edge.product_id).collect();
        product_ids.sort_unstable();
        product_ids.dedup();
        let mut raw_material_ids: Vec<i32> = edges.iter().map(|edge| edge.raw_material_id).collect();
        raw_material_ids.sort_unstable();
        raw_material_ids.dedup();

        let products: HashMap<i32, product::Model> = self
            .products
            .find_by_ids(product_ids)
            .await?
            .into_iter()
            .map(|product| (product.id, product))
            .collect();
        let raw_materials: HashMap<i32, raw_material::Model> = self
            .raw_materials
            .find_by_ids(raw_material_ids)
            .await?
            .into_iter()
            .map(|material| (material.id, material))
            .collect();

        Ok(edges
            .into_iter()
            .filter_map(|edge| {
                match (
                    products.get(&edge.product_id),
                    raw_materials.get(&edge.raw_material_id),
                ) {
                    (Some(product), Some(raw_material)) => Some(ProductRawMaterialDetails {
                        id: edge.id,
                        product: product.clone(),
                        raw_material: raw_material.clone(),
                        quantity_needed: edge.quantity_needed,
                    }),
                    _ => {
                        warn!(
                            product_raw_material_id = edge.id,
                            "Skipping edge with a dangling reference"
                        );
                        None
                    }
                }
            })
            .collect())
    }
}
