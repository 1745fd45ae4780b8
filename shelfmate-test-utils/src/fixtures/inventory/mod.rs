//! Inventory fixture utilities.
//!
//! This module provides methods for inserting categories, units, storages and products
//! into the test database, plus factory functions for in-memory model instances.

pub mod factory;

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{context::TestContext, error::TestError};

impl TestContext {
    pub fn inventory<'a>(&'a mut self) -> InventoryFixtures<'a> {
        InventoryFixtures { setup: self }
    }
}

pub struct InventoryFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> InventoryFixtures<'a> {
    pub async fn insert_mock_category(
        &self,
        name: &str,
    ) -> Result<entity::category::Model, TestError> {
        Ok(
            entity::prelude::Category::insert(entity::category::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_unit(&self, name: &str) -> Result<entity::unit::Model, TestError> {
        Ok(
            entity::prelude::Unit::insert(entity::unit::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_storage(
        &self,
        name: &str,
    ) -> Result<entity::storage::Model, TestError> {
        Ok(
            entity::prelude::Storage::insert(entity::storage::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a product referencing existing resource records.
    ///
    /// The product gets a quantity of 1 and expires on the given date.
    pub async fn insert_mock_product(
        &self,
        name: &str,
        expiration_date: NaiveDate,
        category_id: i32,
        unit_id: i32,
        storage_id: i32,
    ) -> Result<entity::product::Model, TestError> {
        Ok(
            entity::prelude::Product::insert(entity::product::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                quantity: ActiveValue::Set(1),
                expiration_date: ActiveValue::Set(expiration_date),
                category_id: ActiveValue::Set(category_id),
                unit_id: ActiveValue::Set(unit_id),
                storage_id: ActiveValue::Set(storage_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a product together with a fresh category, unit and storage.
    ///
    /// # Returns
    /// - `(product, category, unit, storage)` models as inserted
    pub async fn insert_mock_product_with_resources(
        &mut self,
        name: &str,
        expiration_date: NaiveDate,
    ) -> Result<
        (
            entity::product::Model,
            entity::category::Model,
            entity::unit::Model,
            entity::storage::Model,
        ),
        TestError,
    > {
        let category = self.insert_mock_category("Test Category").await?;
        let unit = self.insert_mock_unit("Test Unit").await?;
        let storage = self.insert_mock_storage("Test Storage").await?;

        let product = self
            .insert_mock_product(name, expiration_date, category.id, unit.id, storage.id)
            .await?;

        Ok((product, category, unit, storage))
    }
}
