pub mod common;
pub mod health;
pub mod product_raw_materials;
pub mod production;
pub mod products;
pub mod raw_materials;

use crate::db::DbPool;
use crate::services::{
    ProductRawMaterialService, ProductService, ProductionService, RawMaterialService,
};
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub products: Arc<ProductService>,
    pub raw_materials: Arc<RawMaterialService>,
    pub product_raw_materials: Arc<ProductRawMaterialService>,
    pub production: Arc<ProductionService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            products: Arc::new(ProductService::new(db_pool.clone())),
            raw_materials: Arc::new(RawMaterialService::new(db_pool.clone())),
            product_raw_materials: Arc::new(ProductRawMaterialService::new(db_pool.clone())),
            production: Arc::new(ProductionService::new(db_pool)),
        }
    }
}
