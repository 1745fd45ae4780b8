use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::product::{NewProductDto, ProductPatch};

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a new product, stamping it with the current time
    pub async fn create(&self, product: &NewProductDto) -> Result<entity::product::Model, DbErr> {
        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(product.name.clone()),
            quantity: ActiveValue::Set(product.quantity),
            expiration_date: ActiveValue::Set(product.expiration_date),
            category_id: ActiveValue::Set(product.category_id),
            unit_id: ActiveValue::Set(product.unit_id),
            storage_id: ActiveValue::Set(product.storage_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        product.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        product_id: i32,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(product_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_storage(
        &self,
        storage_id: i32,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        self.get_where(entity::product::Column::StorageId, storage_id)
            .await
    }

    pub async fn get_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        self.get_where(entity::product::Column::CategoryId, category_id)
            .await
    }

    pub async fn get_by_unit(&self, unit_id: i32) -> Result<Vec<entity::product::Model>, DbErr> {
        self.get_where(entity::product::Column::UnitId, unit_id).await
    }

    async fn get_where(
        &self,
        column: entity::product::Column,
        id: i32,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(column.eq(id))
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the fields present in `patch`
    ///
    /// Returns `Ok(None)` if the product does not exist. An empty patch returns the
    /// stored product without issuing an update.
    pub async fn update(
        &self,
        product_id: i32,
        patch: &ProductPatch,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        let product = match entity::prelude::Product::find_by_id(product_id)
            .one(self.db)
            .await?
        {
            Some(product) => product,
            None => return Ok(None),
        };

        if patch.is_empty() {
            return Ok(Some(product));
        }

        let mut product_am = product.into_active_model();
        if let Some(name) = &patch.name {
            product_am.name = ActiveValue::Set(name.clone());
        }
        if let Some(quantity) = patch.quantity {
            product_am.quantity = ActiveValue::Set(quantity);
        }
        if let Some(expiration_date) = patch.expiration_date {
            product_am.expiration_date = ActiveValue::Set(expiration_date);
        }
        if let Some(category_id) = patch.category_id {
            product_am.category_id = ActiveValue::Set(category_id);
        }
        if let Some(unit_id) = patch.unit_id {
            product_am.unit_id = ActiveValue::Set(unit_id);
        }
        if let Some(storage_id) = patch.storage_id {
            product_am.storage_id = ActiveValue::Set(storage_id);
        }

        let product = product_am.update(self.db).await?;

        Ok(Some(product))
    }

    /// Deletes a product
    ///
    /// Returns OK regardless of the product existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, product_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Product::delete_by_id(product_id)
            .exec(self.db)
            .await
    }
}
