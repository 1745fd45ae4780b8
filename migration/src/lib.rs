pub use sea_orm_migration::prelude::*;

mod m20241020_000001_category;
mod m20241020_000002_unit;
mod m20241020_000003_storage;
mod m20241020_000004_product;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241020_000001_category::Migration),
            Box::new(m20241020_000002_unit::Migration),
            Box::new(m20241020_000003_storage::Migration),
            Box::new(m20241020_000004_product::Migration),
        ]
    }
}
