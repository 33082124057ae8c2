use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub mod product_raw_material_repository;
pub mod product_repository;
pub mod raw_material_repository;

pub use product_raw_material_repository::ProductRawMaterialRepository;
pub use product_repository::ProductRepository;
pub use raw_material_repository::RawMaterialRepository;

/// Repository trait for common database operations
pub trait Repository {
    fn get_db(&self) -> &DatabaseConnection;
}

#[derive(Debug, Clone)]
pub struct BaseRepository {
    db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl Repository for BaseRepository {
    fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}
