pub mod product;
pub mod product_raw_material;
pub mod raw_material;
