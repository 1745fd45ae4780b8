use chrono::Utc;
use dioxus_logger::tracing;
use futures::future::try_join_all;

use crate::{
    client::{
        api::EntityStore,
        error::{ClientError, StoreError},
        service::cascade::{CascadeDelete, CascadeReport},
        store::{
            edit::{EditSession, FieldDiff, ProductDraft, ResourceDraft},
            inventory::{FetchTicket, InventoryState},
            selection::FetchScope,
        },
        view::expiration::AnnotatedProduct,
    },
    model::{
        product::{NewProductDto, ProductDto},
        resource::{ResourceDto, ResourceKind},
    },
};

/// Coordinates the entity store and the inventory view-model for each user action.
///
/// Methods never retry. A failed mutation leaves `state` exactly as it was and returns
/// the error for the caller to surface.
pub struct InventoryService<'a, S: EntityStore> {
    store: &'a S,
}

impl<'a, S: EntityStore> InventoryService<'a, S> {
    /// Creates a new instance of [`InventoryService`]
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Loads categories, units and storages concurrently.
    ///
    /// All three collections are only replaced when every listing succeeds.
    pub async fn load_resources(&self, state: &mut InventoryState) -> Result<(), ClientError> {
        let (categories, units, storages) = futures::try_join!(
            self.store.list_resources(ResourceKind::Category),
            self.store.list_resources(ResourceKind::Unit),
            self.store.list_resources(ResourceKind::Storage),
        )
        .map_err(|source| {
            tracing::warn!("Failed to load resources: {}", source);
            ClientError::Fetch {
                what: "resources",
                source,
            }
        })?;

        state.categories = categories;
        state.units = units;
        state.storages = storages;

        Ok(())
    }

    /// Lists the products for one fetch scope without touching any state.
    ///
    /// Pair with [`InventoryState::begin_product_fetch`] and
    /// [`InventoryService::apply_product_fetch`] when the state cannot stay borrowed while
    /// the request is in flight.
    pub async fn fetch_products(
        &self,
        scope: &FetchScope,
    ) -> Result<Vec<ProductDto>, ClientError> {
        let result = match scope {
            FetchScope::Unscoped => self.store.list_products().await,
            FetchScope::Storages(ids) => try_join_all(
                ids.iter()
                    .map(|&storage_id| self.store.list_products_by_storage(storage_id)),
            )
            .await
            .map(|lists| lists.into_iter().flatten().collect()),
            FetchScope::Nothing => Ok(Vec::new()),
        };

        result.map_err(|source| {
            tracing::warn!("Failed to load products: {}", source);
            ClientError::Fetch {
                what: "products",
                source,
            }
        })
    }

    /// Applies a finished fetch to `state`.
    ///
    /// Returns `Ok(false)` when a newer fetch was started after `ticket`, in which case
    /// the response is dropped, errors included.
    pub fn apply_product_fetch(
        &self,
        state: &mut InventoryState,
        ticket: FetchTicket,
        result: Result<Vec<ProductDto>, ClientError>,
    ) -> Result<bool, ClientError> {
        let error = result.as_ref().err().cloned();

        let applied = state.complete_product_fetch(ticket, result);
        match error {
            Some(err) if applied => Err(err),
            _ => Ok(applied),
        }
    }

    /// Refetches products for the current storage selection.
    ///
    /// An empty selection issues no request and yields an empty list.
    pub async fn refresh_products(&self, state: &mut InventoryState) -> Result<bool, ClientError> {
        let ticket = state.begin_product_fetch();
        let result = self.fetch_products(ticket.scope()).await;

        self.apply_product_fetch(state, ticket, result)
    }

    /// Refetches products after a change the store already accepted.
    ///
    /// A failed refetch is left in `state.status` and not returned, so the caller never
    /// reports an applied change as failed.
    async fn reload_products(&self, state: &mut InventoryState) {
        if let Err(err) = self.refresh_products(state).await {
            tracing::warn!("Change applied but the product list is stale: {}", err);
        }
    }

    /// Relists one resource collection after a change the store already accepted.
    ///
    /// On failure the previous list is kept.
    async fn reload_resource(&self, state: &mut InventoryState, kind: ResourceKind) {
        if let Err(err) = self.load_resource(state, kind).await {
            tracing::warn!("Change applied but the {} list is stale: {}", kind, err);
        }
    }

    /// Reloads resources and products.
    pub async fn refresh(&self, state: &mut InventoryState) -> Result<(), ClientError> {
        self.load_resources(state).await?;
        self.refresh_products(state).await?;

        Ok(())
    }

    pub async fn toggle_storage(
        &self,
        state: &mut InventoryState,
        storage_id: i32,
    ) -> Result<bool, ClientError> {
        state.selection.toggle(storage_id);
        self.refresh_products(state).await
    }

    pub async fn select_all_storages(
        &self,
        state: &mut InventoryState,
    ) -> Result<bool, ClientError> {
        state.selection.select_all();
        self.refresh_products(state).await
    }

    /// The annotated view as of the current time.
    pub fn view(&self, state: &InventoryState) -> Vec<AnnotatedProduct> {
        state.view(Utc::now())
    }

    /// Records a new product and refetches the list.
    ///
    /// Returns the created product even when the refetch fails.
    pub async fn create_product(
        &self,
        state: &mut InventoryState,
        draft: &ProductDraft,
    ) -> Result<ProductDto, ClientError> {
        draft.validate()?;

        let new_product = NewProductDto {
            name: draft.name.clone(),
            quantity: draft.quantity,
            expiration_date: draft.expiration_date,
            category_id: draft.category_id,
            unit_id: draft.unit_id,
            storage_id: draft.storage_id,
        };
        let created = self
            .store
            .create_product(&new_product)
            .await
            .map_err(|source| mutation_failed("create product".to_string(), source))?;

        self.reload_products(state).await;

        Ok(created)
    }

    /// Sends only the changed fields of an edited product.
    ///
    /// # Arguments
    /// - `state` - Inventory state refetched after a successful save; a failed refetch
    ///   only shows in `state.status`
    /// - `product_id` - ID of the product being edited
    /// - `session` - Edit session holding the acknowledged baseline and the edited value
    ///
    /// # Returns
    /// - `Ok(Some(ProductDto))` - The stored product after the patch was applied
    /// - `Ok(None)` - Nothing changed, no request was sent
    /// - `Err(ClientError::InvalidInput)` - The edited value failed validation
    /// - `Err(ClientError::Mutation)` - The store rejected the patch; the baseline is kept
    pub async fn save_product(
        &self,
        state: &mut InventoryState,
        product_id: i32,
        session: &mut EditSession<ProductDraft>,
    ) -> Result<Option<ProductDto>, ClientError> {
        session.current().validate()?;

        let patch = session.patch();
        if patch.is_empty() {
            return Ok(None);
        }

        let saved = self
            .store
            .update_product(product_id, &patch)
            .await
            .map_err(|source| mutation_failed(format!("update product {}", product_id), source))?;
        session.acknowledge(ProductDraft::from(&saved));

        self.reload_products(state).await;

        Ok(Some(saved))
    }

    pub async fn delete_product(
        &self,
        state: &mut InventoryState,
        product_id: i32,
    ) -> Result<(), ClientError> {
        self.store
            .delete_product(product_id)
            .await
            .map_err(|source| mutation_failed(format!("delete product {}", product_id), source))?;

        self.reload_products(state).await;

        Ok(())
    }

    /// Lists the given resource collection and replaces it in `state`.
    pub async fn load_resource(
        &self,
        state: &mut InventoryState,
        kind: ResourceKind,
    ) -> Result<(), ClientError> {
        let resources = self.store.list_resources(kind).await.map_err(|source| {
            tracing::warn!("Failed to load {} list: {}", kind, source);
            ClientError::Fetch {
                what: resource_collection(kind),
                source,
            }
        })?;
        state.set_resources(kind, resources);

        Ok(())
    }

    pub async fn create_resource(
        &self,
        state: &mut InventoryState,
        kind: ResourceKind,
        draft: &ResourceDraft,
    ) -> Result<ResourceDto, ClientError> {
        draft.validate()?;

        let created = self
            .store
            .create_resource(kind, &draft.name)
            .await
            .map_err(|source| mutation_failed(format!("create {}", kind), source))?;

        self.reload_resource(state, kind).await;

        Ok(created)
    }

    /// Renames a resource, sending nothing when the name is unchanged.
    pub async fn rename_resource(
        &self,
        state: &mut InventoryState,
        kind: ResourceKind,
        resource_id: i32,
        session: &mut EditSession<ResourceDraft>,
    ) -> Result<Option<ResourceDto>, ClientError> {
        session.current().validate()?;

        let patch = session.patch();
        if patch.is_empty() {
            return Ok(None);
        }

        let saved = self
            .store
            .update_resource(kind, resource_id, &patch)
            .await
            .map_err(|source| {
                mutation_failed(format!("update {} {}", kind, resource_id), source)
            })?;
        session.acknowledge(ResourceDraft::from(&saved));

        self.reload_resource(state, kind).await;

        Ok(Some(saved))
    }

    /// Deletes a resource together with every product referencing it, then reloads.
    ///
    /// A deleted storage is also dropped from the storage selection. Once the cascade has
    /// finished the report is returned, whether or not the reload succeeds.
    pub async fn delete_resource(
        &self,
        state: &mut InventoryState,
        kind: ResourceKind,
        resource_id: i32,
    ) -> Result<CascadeReport, ClientError> {
        let report = CascadeDelete::new(kind, resource_id).run(self.store).await?;

        if kind == ResourceKind::Storage && state.selection.contains(resource_id) {
            state.selection.toggle(resource_id);
        }
        if let Err(err) = self.load_resources(state).await {
            tracing::warn!(
                "Deleted {} {} but the resource lists are stale: {}",
                kind,
                resource_id,
                err
            );
        }
        self.reload_products(state).await;

        Ok(report)
    }
}

fn mutation_failed(action: String, source: StoreError) -> ClientError {
    tracing::warn!("Failed to {}: {}", action, source);
    ClientError::Mutation { action, source }
}

fn resource_collection(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Category => "categories",
        ResourceKind::Unit => "units",
        ResourceKind::Storage => "storages",
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate};
    use serde_json::json;

    use super::*;
    use crate::client::{store::inventory::LoadStatus, util::test::memory_store::MemoryStore};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 1).unwrap()
    }

    struct Seeded {
        store: MemoryStore,
        category: i32,
        unit: i32,
        fridge: i32,
        pantry: i32,
        milk: i32,
    }

    fn seeded() -> Seeded {
        let store = MemoryStore::new();
        let category = store.with_resource(ResourceKind::Category, "Dairy");
        let unit = store.with_resource(ResourceKind::Unit, "Litre");
        let fridge = store.with_resource(ResourceKind::Storage, "Fridge");
        let pantry = store.with_resource(ResourceKind::Storage, "Pantry");
        let milk = store.with_product("Milk", date(), category, unit, fridge);
        store.with_product("Rice", date(), category, unit, pantry);

        Seeded {
            store,
            category,
            unit,
            fridge,
            pantry,
            milk,
        }
    }

    mod refresh {
        use super::*;

        /// Expect resources and every product to load with the default selection
        #[tokio::test]
        async fn loads_everything() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();

            service.refresh(&mut state).await.unwrap();

            assert_eq!(state.products.len(), 2);
            assert_eq!(state.storages.len(), 2);
            assert_eq!(state.status, LoadStatus::Ready);
            assert_eq!(s.store.count_calls("list_products"), 1);
        }

        /// Expect one listing per selected storage, merged into one list
        #[tokio::test]
        async fn fetches_each_selected_storage() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            service.load_resources(&mut state).await.unwrap();

            service.toggle_storage(&mut state, s.fridge).await.unwrap();
            assert_eq!(state.products.len(), 1);
            assert_eq!(state.products[0].id, s.milk);

            service.toggle_storage(&mut state, s.pantry).await.unwrap();
            assert_eq!(state.products.len(), 2);
            assert_eq!(s.store.count_calls("list_products_by_storage"), 3);
            assert_eq!(state.selection_label(), "Fridge, Pantry");
        }

        /// Expect an empty selection to issue no request and show no products
        #[tokio::test]
        async fn empty_selection_fetches_nothing() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            service.refresh(&mut state).await.unwrap();
            service.toggle_storage(&mut state, s.fridge).await.unwrap();
            let calls = s.store.calls().len();

            service.toggle_storage(&mut state, s.fridge).await.unwrap();

            assert_eq!(s.store.calls().len(), calls);
            assert!(state.products.is_empty());
            assert_eq!(state.status, LoadStatus::Ready);
            assert_eq!(state.selection_label(), "Select Storages");
        }

        /// Expect select all to return to the unscoped listing
        #[tokio::test]
        async fn select_all_fetches_unscoped() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            service.toggle_storage(&mut state, s.fridge).await.unwrap();

            service.select_all_storages(&mut state).await.unwrap();

            assert!(state.selection.is_all());
            assert_eq!(state.products.len(), 2);
        }

        /// Expect a listing failure to clear the products and mark the state failed
        #[tokio::test]
        async fn failure_clears_products() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            service.refresh(&mut state).await.unwrap();

            s.store.fail_listings(true);
            let result = service.refresh_products(&mut state).await;

            assert!(matches!(result, Err(ClientError::Fetch { what: "products", .. })));
            assert!(state.products.is_empty());
            assert!(matches!(state.status, LoadStatus::Failed(_)));
        }

        /// Expect a resource listing failure to leave the loaded resources untouched
        #[tokio::test]
        async fn resource_failure_keeps_resources() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            service.load_resources(&mut state).await.unwrap();

            s.store.fail_listings(true);
            let result = service.load_resources(&mut state).await;

            assert!(matches!(result, Err(ClientError::Fetch { what: "resources", .. })));
            assert_eq!(state.categories.len(), 1);
        }
    }

    mod stale_fetch {
        use super::*;

        /// Expect an older fetch that finishes after a newer one to be discarded
        #[tokio::test]
        async fn older_fetch_finishing_last_is_discarded() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            service.load_resources(&mut state).await.unwrap();

            let older = state.begin_product_fetch();
            state.selection.toggle(s.pantry);
            let newer = state.begin_product_fetch();
            let (older_result, newer_result) = futures::join!(
                service.fetch_products(older.scope()),
                service.fetch_products(newer.scope()),
            );

            let newer_applied = service.apply_product_fetch(&mut state, newer, newer_result);
            let older_applied = service.apply_product_fetch(&mut state, older, older_result);

            assert!(newer_applied.unwrap());
            assert!(!older_applied.unwrap());
            assert_eq!(state.products.len(), 1);
            assert_eq!(state.products[0].name, "Rice");
            assert_eq!(state.status, LoadStatus::Ready);
        }

        /// Expect a stale failure to be dropped without touching the loaded list
        #[tokio::test]
        async fn stale_failure_is_not_reported() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();

            let older = state.begin_product_fetch();
            s.store.fail_listings(true);
            let older_result = service.fetch_products(older.scope()).await;
            s.store.fail_listings(false);
            service.refresh_products(&mut state).await.unwrap();

            let applied = service.apply_product_fetch(&mut state, older, older_result);

            assert!(!applied.unwrap());
            assert_eq!(state.products.len(), 2);
            assert_eq!(state.status, LoadStatus::Ready);
        }
    }

    mod applied_changes {
        use super::*;

        /// Expect a create to succeed once stored, even when the refetch fails
        #[tokio::test]
        async fn create_succeeds_when_refetch_fails() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            let draft = ProductDraft {
                name: "Butter".to_string(),
                quantity: 1,
                expiration_date: date(),
                category_id: s.category,
                unit_id: s.unit,
                storage_id: s.fridge,
            };

            s.store.fail_listings_after_change();
            let created = service.create_product(&mut state, &draft).await.unwrap();

            assert_eq!(created.name, "Butter");
            assert_eq!(
                s.store
                    .products()
                    .iter()
                    .filter(|p| p.name == "Butter")
                    .count(),
                1
            );
            assert!(state.products.is_empty());
            assert!(matches!(state.status, LoadStatus::Failed(_)));
        }

        /// Expect a saved edit to advance the baseline even when the refetch fails
        #[tokio::test]
        async fn save_succeeds_when_refetch_fails() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            let product = s.store.products()[0].clone();
            let mut session = EditSession::new(ProductDraft::from(&product));
            session.current_mut().quantity = 5;

            s.store.fail_listings_after_change();
            let saved = service
                .save_product(&mut state, product.id, &mut session)
                .await
                .unwrap();

            assert_eq!(saved.map(|p| p.quantity), Some(5));
            assert!(session.patch().is_empty());
            assert!(matches!(state.status, LoadStatus::Failed(_)));
        }

        /// Expect a finished cascade to return its report when the reload fails
        #[tokio::test]
        async fn cascade_succeeds_when_reload_fails() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            service.refresh(&mut state).await.unwrap();

            s.store.fail_listings_after_change();
            let report = service
                .delete_resource(&mut state, ResourceKind::Category, s.category)
                .await
                .unwrap();

            assert_eq!(report.deleted_products.len(), 2);
            assert!(s.store.resources(ResourceKind::Category).is_empty());
            assert!(s.store.products().is_empty());
            assert_eq!(state.categories.len(), 1);
            assert!(matches!(state.status, LoadStatus::Failed(_)));

            s.store.clear_failures();
            service.refresh(&mut state).await.unwrap();
            assert!(state.categories.is_empty());
            assert!(state.products.is_empty());
        }

        /// Expect a renamed resource to be returned while the old list stays in place
        #[tokio::test]
        async fn rename_succeeds_when_relist_fails() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            service.load_resources(&mut state).await.unwrap();
            let storage = state.storages[0].clone();
            let mut session = EditSession::new(ResourceDraft::from(&storage));
            session.current_mut().name = "Cold Room".to_string();

            s.store.fail_listings_after_change();
            let saved = service
                .rename_resource(&mut state, ResourceKind::Storage, storage.id, &mut session)
                .await
                .unwrap();

            assert_eq!(saved.map(|r| r.name), Some("Cold Room".to_string()));
            assert_eq!(state.storages[0].name, "Fridge");
        }
    }

    mod save_product {
        use super::*;

        /// Expect only the changed quantity to be sent and the baseline to advance
        #[tokio::test]
        async fn sends_changed_fields() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            let product = s.store.products()[0].clone();
            let mut session = EditSession::new(ProductDraft::from(&product));

            session.current_mut().quantity = 5;
            assert_eq!(serde_json::to_value(session.patch()).unwrap(), json!({ "quantity": 5 }));
            let saved = service
                .save_product(&mut state, product.id, &mut session)
                .await
                .unwrap()
                .unwrap();

            assert_eq!(saved.quantity, 5);
            assert_eq!(saved.name, "Milk");
            assert!(session.patch().is_empty());
            assert_eq!(state.products.len(), 2);
        }

        /// Expect no request when nothing changed
        #[tokio::test]
        async fn unchanged_draft_sends_nothing() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            let product = s.store.products()[0].clone();
            let mut session = EditSession::new(ProductDraft::from(&product));

            let saved = service
                .save_product(&mut state, product.id, &mut session)
                .await
                .unwrap();

            assert!(saved.is_none());
            assert_eq!(s.store.count_calls("update_product"), 0);
        }

        /// Expect the baseline to be kept when the store rejects the patch
        #[tokio::test]
        async fn failure_keeps_baseline() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            let product = s.store.products()[0].clone();
            let mut session = EditSession::new(ProductDraft::from(&product));
            session.current_mut().quantity = 5;

            s.store.fail_updates(true);
            let result = service
                .save_product(&mut state, product.id, &mut session)
                .await;

            assert!(matches!(result, Err(ClientError::Mutation { .. })));
            assert_eq!(session.baseline().quantity, 1);
            assert_eq!(session.patch().quantity, Some(5));
            assert_eq!(state.status, LoadStatus::Idle);
        }

        /// Expect invalid drafts to be rejected before any request
        #[tokio::test]
        async fn invalid_draft_is_rejected() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            let product = s.store.products()[0].clone();
            let mut session = EditSession::new(ProductDraft::from(&product));
            session.current_mut().name = String::new();

            let result = service
                .save_product(&mut state, product.id, &mut session)
                .await;

            assert!(matches!(result, Err(ClientError::InvalidInput(_))));
            assert_eq!(s.store.count_calls("update_product"), 0);
        }
    }

    mod products {
        use super::*;

        /// Expect a created product to appear after the refetch
        #[tokio::test]
        async fn create_then_delete() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            let draft = ProductDraft {
                name: "Butter".to_string(),
                quantity: 2,
                expiration_date: date().checked_add_days(Days::new(14)).unwrap(),
                category_id: s.category,
                unit_id: s.unit,
                storage_id: s.fridge,
            };

            let created = service.create_product(&mut state, &draft).await.unwrap();
            assert_eq!(state.products.len(), 3);

            service.delete_product(&mut state, created.id).await.unwrap();
            assert_eq!(state.products.len(), 2);
        }

        /// Expect a dangling reference to be reported as a failed mutation
        #[tokio::test]
        async fn create_with_missing_storage_fails() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            let draft = ProductDraft {
                name: "Butter".to_string(),
                quantity: 2,
                expiration_date: date(),
                category_id: s.category,
                unit_id: s.unit,
                storage_id: 999,
            };

            let result = service.create_product(&mut state, &draft).await;

            match result {
                Err(ClientError::Mutation { source, .. }) => {
                    assert!(matches!(source, StoreError::Validation(_)))
                }
                other => panic!("expected Mutation error, got {:?}", other),
            }
            assert!(state.products.is_empty());
        }

        /// Expect deleting a missing product to surface NotFound detail
        #[tokio::test]
        async fn delete_missing_product_fails() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();

            let err = service.delete_product(&mut state, 999).await.unwrap_err();

            assert_eq!(err.detail().as_deref(), Some("product 999 no longer exists"));
        }
    }

    mod resources {
        use super::*;

        /// Expect created and renamed resources to be reflected in the state
        #[tokio::test]
        async fn create_and_rename() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();

            let created = service
                .create_resource(
                    &mut state,
                    ResourceKind::Unit,
                    &ResourceDraft {
                        name: "Gram".to_string(),
                    },
                )
                .await
                .unwrap();
            assert_eq!(state.units.len(), 2);

            let mut session = EditSession::new(ResourceDraft::from(&created));
            session.current_mut().name = "Kilogram".to_string();
            service
                .rename_resource(&mut state, ResourceKind::Unit, created.id, &mut session)
                .await
                .unwrap();

            assert!(state.units.iter().any(|u| u.name == "Kilogram"));
            assert!(!session.is_dirty());
        }

        /// Expect deleting a selected storage to cascade and drop it from the selection
        #[tokio::test]
        async fn delete_selected_storage() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            service.toggle_storage(&mut state, s.fridge).await.unwrap();
            service.toggle_storage(&mut state, s.pantry).await.unwrap();

            let report = service
                .delete_resource(&mut state, ResourceKind::Storage, s.fridge)
                .await
                .unwrap();

            assert_eq!(report.deleted_products, vec![s.milk]);
            assert!(!state.selection.contains(s.fridge));
            assert!(state.selection.contains(s.pantry));
            assert_eq!(state.storages.len(), 1);
            assert_eq!(state.products.len(), 1);
        }

        /// Expect a failed cascade to surface as a cascade error and keep the resource
        #[tokio::test]
        async fn failed_cascade_keeps_resource() {
            let s = seeded();
            let service = InventoryService::new(&s.store);
            let mut state = InventoryState::default();
            s.store.fail_product_delete(s.milk);

            let result = service
                .delete_resource(&mut state, ResourceKind::Category, s.category)
                .await;

            assert!(matches!(result, Err(ClientError::Cascade(_))));
            assert_eq!(s.store.resources(ResourceKind::Category).len(), 1);
        }
    }
}
