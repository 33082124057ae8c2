// Catalog management
pub mod product_raw_materials;
pub mod products;
pub mod raw_materials;

// Production planning
pub mod production;

pub use product_raw_materials::ProductRawMaterialService;
pub use production::ProductionService;
pub use products::ProductService;
pub use raw_materials::RawMaterialService;
