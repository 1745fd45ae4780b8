//! Entity store access.
//!
//! The client core talks to persisted data only through [`EntityStore`]. The
//! `server` feature provides a database-backed implementation
//! ([`DatabaseStore`](crate::server::service::store::DatabaseStore)); tests use an
//! in-memory fake.

use crate::{
    client::error::StoreError,
    model::{
        product::{NewProductDto, ProductDto, ProductPatch},
        resource::{ResourceDto, ResourceKind, ResourcePatch},
    },
};

/// Asynchronous CRUD over products and the three resource collections.
///
/// Every call either succeeds or fails with a [`StoreError`]; implementations do not
/// retry and the client never does either.
#[allow(async_fn_in_trait)]
pub trait EntityStore {
    async fn list_products(&self) -> Result<Vec<ProductDto>, StoreError>;

    async fn list_products_by_storage(
        &self,
        storage_id: i32,
    ) -> Result<Vec<ProductDto>, StoreError>;

    async fn list_products_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<ProductDto>, StoreError>;

    async fn list_products_by_unit(&self, unit_id: i32) -> Result<Vec<ProductDto>, StoreError>;

    async fn get_product(&self, product_id: i32) -> Result<ProductDto, StoreError>;

    async fn create_product(&self, product: &NewProductDto) -> Result<ProductDto, StoreError>;

    /// Applies only the fields present in `patch` and returns the stored record.
    async fn update_product(
        &self,
        product_id: i32,
        patch: &ProductPatch,
    ) -> Result<ProductDto, StoreError>;

    async fn delete_product(&self, product_id: i32) -> Result<(), StoreError>;

    async fn list_resources(&self, kind: ResourceKind) -> Result<Vec<ResourceDto>, StoreError>;

    async fn create_resource(
        &self,
        kind: ResourceKind,
        name: &str,
    ) -> Result<ResourceDto, StoreError>;

    async fn update_resource(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        patch: &ResourcePatch,
    ) -> Result<ResourceDto, StoreError>;

    /// Deletes the resource record only; referencing products are not touched.
    async fn delete_resource(&self, kind: ResourceKind, resource_id: i32)
        -> Result<(), StoreError>;

    /// Lists products referencing the given resource.
    async fn list_products_by_resource(
        &self,
        kind: ResourceKind,
        resource_id: i32,
    ) -> Result<Vec<ProductDto>, StoreError> {
        match kind {
            ResourceKind::Category => self.list_products_by_category(resource_id).await,
            ResourceKind::Unit => self.list_products_by_unit(resource_id).await,
            ResourceKind::Storage => self.list_products_by_storage(resource_id).await,
        }
    }
}
