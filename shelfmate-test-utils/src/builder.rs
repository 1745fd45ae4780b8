//! Declarative test builder for Phase 1 setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// resource fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_inventory_tables: bool,

    // Database fixtures to insert
    categories: Vec<String>,
    units: Vec<String>,
    storages: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_inventory_tables: false,
            categories: Vec::new(),
            units: Vec::new(),
            storages: Vec::new(),
        }
    }

    /// Add the inventory tables to the test database.
    ///
    /// Creates Category, Unit, Storage and Product, in that order so the product
    /// foreign keys resolve.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_inventory_tables(mut self) -> Self {
        self.include_inventory_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shelfmate_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), shelfmate_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Category)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a category with the given name during `build()`.
    pub fn with_category(mut self, name: &str) -> Self {
        self.categories.push(name.to_string());
        self
    }

    /// Insert a unit with the given name during `build()`.
    pub fn with_unit(mut self, name: &str) -> Self {
        self.units.push(name.to_string());
        self
    }

    /// Insert a storage with the given name during `build()`.
    pub fn with_storage(mut self, name: &str) -> Self {
        self.storages.push(name.to_string());
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (inventory tables if specified, then custom tables)
    /// 2. Inserts resource fixtures (categories, units, storages)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_inventory_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Category),
                schema.create_table_from_entity(entity::prelude::Unit),
                schema.create_table_from_entity(entity::prelude::Storage),
                schema.create_table_from_entity(entity::prelude::Product),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for name in &self.categories {
            setup.inventory().insert_mock_category(name).await?;
        }

        for name in &self.units {
            setup.inventory().insert_mock_unit(name).await?;
        }

        for name in &self.storages {
            setup.inventory().insert_mock_storage(name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_creates_inventory_tables() {
        let result = TestBuilder::new().with_inventory_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_chains_methods() {
        let result = TestBuilder::new()
            .with_inventory_tables()
            .with_category("Dairy")
            .with_unit("Litre")
            .with_storage("Fridge")
            .build()
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_fails_fixtures_without_tables() {
        let result = TestBuilder::new().with_category("Dairy").build().await;
        assert!(result.is_err());
    }
}
