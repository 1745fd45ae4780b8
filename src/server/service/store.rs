//! Relational [`EntityStore`] implementation.
//!
//! Wraps the repositories in `server::data` and translates their results into the
//! client's DTOs and [`StoreError`] taxonomy. Referential checks are done here before
//! writing so a dangling foreign key is reported as a validation failure rather than an
//! opaque database error.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    client::{api::EntityStore, error::StoreError},
    model::{
        product::{NewProductDto, ProductDto, ProductPatch},
        resource::{ResourceDto, ResourceKind, ResourcePatch},
    },
    server::data::{
        category::CategoryRepository, product::ProductRepository, storage::StorageRepository,
        unit::UnitRepository,
    },
};

fn failed(err: DbErr) -> StoreError {
    tracing::error!("Database error: {}", err);
    StoreError::Failed(err.to_string())
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation("name must not be empty".to_string()));
    }

    Ok(())
}

fn validate_quantity(quantity: i32) -> Result<(), StoreError> {
    if quantity < 0 {
        return Err(StoreError::Validation(format!(
            "quantity must not be negative, got {}",
            quantity
        )));
    }

    Ok(())
}

pub struct DatabaseStore<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DatabaseStore<'a> {
    /// Creates a new instance of [`DatabaseStore`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_resource(
        &self,
        kind: ResourceKind,
        resource_id: i32,
    ) -> Result<Option<ResourceDto>, StoreError> {
        let resource = match kind {
            ResourceKind::Category => CategoryRepository::new(self.db)
                .get_by_id(resource_id)
                .await
                .map(|model| model.map(ResourceDto::from)),
            ResourceKind::Unit => UnitRepository::new(self.db)
                .get_by_id(resource_id)
                .await
                .map(|model| model.map(ResourceDto::from)),
            ResourceKind::Storage => StorageRepository::new(self.db)
                .get_by_id(resource_id)
                .await
                .map(|model| model.map(ResourceDto::from)),
        };

        resource.map_err(failed)
    }

    /// Ensures a referenced resource exists before a product points at it.
    async fn check_reference(
        &self,
        kind: ResourceKind,
        resource_id: i32,
    ) -> Result<(), StoreError> {
        match self.find_resource(kind, resource_id).await? {
            Some(_) => Ok(()),
            None => Err(StoreError::Validation(format!(
                "{} {} does not exist",
                kind, resource_id
            ))),
        }
    }

    async fn check_references(&self, patch: &ProductPatch) -> Result<(), StoreError> {
        let references = [
            (ResourceKind::Category, patch.category_id),
            (ResourceKind::Unit, patch.unit_id),
            (ResourceKind::Storage, patch.storage_id),
        ];

        for (kind, resource_id) in references {
            if let Some(resource_id) = resource_id {
                self.check_reference(kind, resource_id).await?;
            }
        }

        Ok(())
    }
}

impl EntityStore for DatabaseStore<'_> {
    async fn list_products(&self) -> Result<Vec<ProductDto>, StoreError> {
        let products = ProductRepository::new(self.db)
            .get_all()
            .await
            .map_err(failed)?;

        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    async fn list_products_by_storage(
        &self,
        storage_id: i32,
    ) -> Result<Vec<ProductDto>, StoreError> {
        let products = ProductRepository::new(self.db)
            .get_by_storage(storage_id)
            .await
            .map_err(failed)?;

        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    async fn list_products_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<ProductDto>, StoreError> {
        let products = ProductRepository::new(self.db)
            .get_by_category(category_id)
            .await
            .map_err(failed)?;

        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    async fn list_products_by_unit(&self, unit_id: i32) -> Result<Vec<ProductDto>, StoreError> {
        let products = ProductRepository::new(self.db)
            .get_by_unit(unit_id)
            .await
            .map_err(failed)?;

        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    async fn get_product(&self, product_id: i32) -> Result<ProductDto, StoreError> {
        ProductRepository::new(self.db)
            .get_by_id(product_id)
            .await
            .map_err(failed)?
            .map(ProductDto::from)
            .ok_or(StoreError::product_not_found(product_id))
    }

    async fn create_product(&self, product: &NewProductDto) -> Result<ProductDto, StoreError> {
        validate_name(&product.name)?;
        validate_quantity(product.quantity)?;
        self.check_reference(ResourceKind::Category, product.category_id)
            .await?;
        self.check_reference(ResourceKind::Unit, product.unit_id)
            .await?;
        self.check_reference(ResourceKind::Storage, product.storage_id)
            .await?;

        let product = ProductRepository::new(self.db)
            .create(product)
            .await
            .map_err(failed)?;

        Ok(ProductDto::from(product))
    }

    async fn update_product(
        &self,
        product_id: i32,
        patch: &ProductPatch,
    ) -> Result<ProductDto, StoreError> {
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(quantity) = patch.quantity {
            validate_quantity(quantity)?;
        }
        self.check_references(patch).await?;

        ProductRepository::new(self.db)
            .update(product_id, patch)
            .await
            .map_err(failed)?
            .map(ProductDto::from)
            .ok_or(StoreError::product_not_found(product_id))
    }

    async fn delete_product(&self, product_id: i32) -> Result<(), StoreError> {
        let result = ProductRepository::new(self.db)
            .delete(product_id)
            .await
            .map_err(failed)?;

        if result.rows_affected == 0 {
            return Err(StoreError::product_not_found(product_id));
        }

        Ok(())
    }

    async fn list_resources(&self, kind: ResourceKind) -> Result<Vec<ResourceDto>, StoreError> {
        let resources: Result<Vec<ResourceDto>, DbErr> = match kind {
            ResourceKind::Category => CategoryRepository::new(self.db)
                .get_all()
                .await
                .map(|models| models.into_iter().map(ResourceDto::from).collect()),
            ResourceKind::Unit => UnitRepository::new(self.db)
                .get_all()
                .await
                .map(|models| models.into_iter().map(ResourceDto::from).collect()),
            ResourceKind::Storage => StorageRepository::new(self.db)
                .get_all()
                .await
                .map(|models| models.into_iter().map(ResourceDto::from).collect()),
        };

        resources.map_err(failed)
    }

    async fn create_resource(
        &self,
        kind: ResourceKind,
        name: &str,
    ) -> Result<ResourceDto, StoreError> {
        validate_name(name)?;

        let resource = match kind {
            ResourceKind::Category => CategoryRepository::new(self.db)
                .create(name)
                .await
                .map(ResourceDto::from),
            ResourceKind::Unit => UnitRepository::new(self.db)
                .create(name)
                .await
                .map(ResourceDto::from),
            ResourceKind::Storage => StorageRepository::new(self.db)
                .create(name)
                .await
                .map(ResourceDto::from),
        };

        resource.map_err(failed)
    }

    async fn update_resource(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        patch: &ResourcePatch,
    ) -> Result<ResourceDto, StoreError> {
        let name = match &patch.name {
            Some(name) => name,
            None => {
                return self
                    .find_resource(kind, resource_id)
                    .await?
                    .ok_or(StoreError::resource_not_found(kind, resource_id))
            }
        };
        validate_name(name)?;

        let resource = match kind {
            ResourceKind::Category => CategoryRepository::new(self.db)
                .update(resource_id, name)
                .await
                .map(|model| model.map(ResourceDto::from)),
            ResourceKind::Unit => UnitRepository::new(self.db)
                .update(resource_id, name)
                .await
                .map(|model| model.map(ResourceDto::from)),
            ResourceKind::Storage => StorageRepository::new(self.db)
                .update(resource_id, name)
                .await
                .map(|model| model.map(ResourceDto::from)),
        };

        resource
            .map_err(failed)?
            .ok_or(StoreError::resource_not_found(kind, resource_id))
    }

    async fn delete_resource(
        &self,
        kind: ResourceKind,
        resource_id: i32,
    ) -> Result<(), StoreError> {
        let result = match kind {
            ResourceKind::Category => CategoryRepository::new(self.db).delete(resource_id).await,
            ResourceKind::Unit => UnitRepository::new(self.db).delete(resource_id).await,
            ResourceKind::Storage => StorageRepository::new(self.db).delete(resource_id).await,
        }
        .map_err(failed)?;

        if result.rows_affected == 0 {
            return Err(StoreError::resource_not_found(kind, resource_id));
        }

        Ok(())
    }
}
