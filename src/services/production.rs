//! Production suggestions.
//!
//! Given the current raw-material stock and every product's bill of
//! materials, work out how many whole units of each product could be made
//! and rank the candidates by the total sale value of that production.
//! Stock is only read here, never decremented.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use serde::Serialize;
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

use crate::{
    entities::{product, product_raw_material, raw_material},
    errors::ServiceError,
    repositories::{ProductRawMaterialRepository, ProductRepository, RawMaterialRepository},
};

/// A product worth manufacturing, with how many units current stock allows.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductionSuggestion {
    pub product: product::Model,
    pub quantity_producible: i32,
    /// `product.value * quantity_producible`
    pub total_value: f64,
}

impl ProductionSuggestion {
    pub fn new(product: product::Model, quantity_producible: i32) -> Self {
        let total_value = product.value * f64::from(quantity_producible);
        Self {
            product,
            quantity_producible,
            total_value,
        }
    }
}

/// Raw-material id to quantity on hand.
#[derive(Debug, Default, Clone)]
pub struct StockIndex {
    stock: HashMap<i32, i32>,
}

impl StockIndex {
    /// Later entries win if an id repeats.
    pub fn from_raw_materials(raw_materials: &[raw_material::Model]) -> Self {
        let stock = raw_materials
            .iter()
            .map(|material| (material.id, material.quantity_in_stock))
            .collect();
        Self { stock }
    }

    /// Unknown raw materials have no stock.
    pub fn stock_of(&self, raw_material_id: i32) -> i32 {
        self.stock.get(&raw_material_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }
}

/// Groups requirement edges by product id, keeping each group in input order.
pub fn group_by_product(
    requirements: &[product_raw_material::Model],
) -> HashMap<i32, Vec<&product_raw_material::Model>> {
    let mut groups: HashMap<i32, Vec<&product_raw_material::Model>> = HashMap::new();
    for requirement in requirements {
        groups
            .entry(requirement.product_id)
            .or_default()
            .push(requirement);
    }
    groups
}

/// Maximum whole units makeable from `stock`, limited by the scarcest input.
///
/// Edges with `quantity_needed <= 0` never limit production. Returns `None`
/// when no edge limits production at all, which callers must treat as "cannot
/// be evaluated" rather than as unlimited.
pub fn producible_quantity<'a, I>(requirements: I, stock: &StockIndex) -> Option<i32>
where
    I: IntoIterator<Item = &'a product_raw_material::Model>,
{
    requirements
        .into_iter()
        .filter(|requirement| requirement.quantity_needed > 0)
        .map(|requirement| {
            stock
                .stock_of(requirement.raw_material_id)
                .div_euclid(requirement.quantity_needed)
        })
        .min()
}

/// Builds the value-ranked suggestion list.
///
/// Products without requirement edges, without a limiting edge, or with
/// nothing producible are left out. Equal totals keep the order of
/// `products`.
pub fn suggest_production(
    products: &[product::Model],
    raw_materials: &[raw_material::Model],
    requirements: &[product_raw_material::Model],
) -> Vec<ProductionSuggestion> {
    let stock = StockIndex::from_raw_materials(raw_materials);
    let requirements_by_product = group_by_product(requirements);

    let mut suggestions: Vec<ProductionSuggestion> = products
        .iter()
        .filter_map(|product| {
            let product_requirements = requirements_by_product.get(&product.id)?;
            let quantity = producible_quantity(product_requirements.iter().copied(), &stock)?;
            (quantity > 0).then(|| ProductionSuggestion::new(product.clone(), quantity))
        })
        .collect();

    // slice::sort_by is stable
    suggestions.sort_by(|a, b| ranking_key(b.total_value).total_cmp(&ranking_key(a.total_value)));
    suggestions
}

// -0.0 and 0.0 rank as a tie
fn ranking_key(total_value: f64) -> f64 {
    if total_value == 0.0 {
        0.0
    } else {
        total_value
    }
}

/// Read access to the three collections a suggestion run needs.
#[async_trait]
pub trait InventoryReader: Send + Sync {
    async fn list_all_raw_materials(&self) -> Result<Vec<raw_material::Model>, ServiceError>;
    async fn list_all_products(&self) -> Result<Vec<product::Model>, ServiceError>;
    async fn list_all_requirement_edges(
        &self,
    ) -> Result<Vec<product_raw_material::Model>, ServiceError>;
}

#[async_trait]
impl InventoryReader for DatabaseTransaction {
    async fn list_all_raw_materials(&self) -> Result<Vec<raw_material::Model>, ServiceError> {
        RawMaterialRepository::find_all_in(self).await
    }

    async fn list_all_products(&self) -> Result<Vec<product::Model>, ServiceError> {
        ProductRepository::find_all_in(self).await
    }

    async fn list_all_requirement_edges(
        &self,
    ) -> Result<Vec<product_raw_material::Model>, ServiceError> {
        ProductRawMaterialRepository::find_all_in(self).await
    }
}

/// Reads everything from `reader` and computes suggestions. Any read failure
/// is returned as-is; nothing is computed from a partial read.
pub async fn suggest_from<R>(reader: &R) -> Result<Vec<ProductionSuggestion>, ServiceError>
where
    R: InventoryReader + ?Sized,
{
    let products = reader.list_all_products().await?;
    let raw_materials = reader.list_all_raw_materials().await?;
    let requirements = reader.list_all_requirement_edges().await?;

    debug!(
        products = products.len(),
        raw_materials = raw_materials.len(),
        requirements = requirements.len(),
        "evaluating production"
    );

    Ok(suggest_production(&products, &raw_materials, &requirements))
}

/// Computes production suggestions from a single-transaction snapshot.
#[derive(Clone)]
pub struct ProductionService {
    db: Arc<DatabaseConnection>,
}

impl ProductionService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn suggested_production(&self) -> Result<Vec<ProductionSuggestion>, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db_error)?;
        let suggestions = suggest_from(&txn).await?;
        txn.commit().await.map_err(ServiceError::db_error)?;

        info!(
            suggestions = suggestions.len(),
            "Production suggestions computed"
        );
        Ok(suggestions)
    }
}
