//! Cascading delete of a category, unit or storage.
//!
//! The store has no cascade of its own, so a resource is removed together with every
//! product referencing it:
//!
//! 1. `Listing` - find the dependent products
//! 2. `DeletingDependents` - delete all of them concurrently and wait for every result
//! 3. `DeletingResource` - delete the resource, only if step 2 fully succeeded
//!
//! Steps 2 and 3 are not atomic. A failed run can simply be run again; it always
//! restarts at `Listing`, so products already deleted are not requested again.

use dioxus_logger::tracing;
use futures::future::join_all;

use crate::{
    client::{
        api::EntityStore,
        error::{CascadeError, StoreError},
    },
    model::resource::ResourceKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadePhase {
    Listing,
    DeletingDependents,
    DeletingResource,
    Done,
    Failed,
}

/// Outcome of a completed cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeReport {
    pub kind: ResourceKind,
    pub resource_id: i32,
    /// Ids of the dependent products removed before the resource itself.
    pub deleted_products: Vec<i32>,
}

/// A cascading delete of one resource, tracked through its phases.
#[derive(Debug, Clone)]
pub struct CascadeDelete {
    kind: ResourceKind,
    resource_id: i32,
    phase: CascadePhase,
}

impl CascadeDelete {
    pub fn new(kind: ResourceKind, resource_id: i32) -> Self {
        Self {
            kind,
            resource_id,
            phase: CascadePhase::Listing,
        }
    }

    pub fn phase(&self) -> CascadePhase {
        self.phase
    }

    fn transition(&mut self, next: CascadePhase) {
        tracing::debug!(
            "Cascade delete of {} {}: {:?} -> {:?}",
            self.kind,
            self.resource_id,
            self.phase,
            next
        );
        self.phase = next;
    }

    fn fail(&mut self, err: CascadeError) -> CascadeError {
        self.transition(CascadePhase::Failed);
        tracing::warn!("{}", err);
        err
    }

    /// Runs the cascade from `Listing`.
    ///
    /// # Arguments
    /// - `store` - Entity store the listing and deletes are issued against
    ///
    /// # Returns
    /// - `Ok(CascadeReport)` - Every dependent product and the resource were deleted
    /// - `Err(CascadeError::Listing)` - Dependents could not be listed, nothing was deleted
    /// - `Err(CascadeError::Dependents)` - At least one product delete failed, the
    ///   resource was kept
    /// - `Err(CascadeError::Resource)` - Dependents were deleted but the resource was not
    pub async fn run<S: EntityStore>(&mut self, store: &S) -> Result<CascadeReport, CascadeError> {
        let kind = self.kind;
        let id = self.resource_id;

        self.transition(CascadePhase::Listing);
        let dependents = match store.list_products_by_resource(kind, id).await {
            Ok(products) => products,
            Err(source) => return Err(self.fail(CascadeError::Listing { kind, id, source })),
        };
        let product_ids: Vec<i32> = dependents.iter().map(|product| product.id).collect();

        self.transition(CascadePhase::DeletingDependents);
        let results = join_all(product_ids.iter().map(|&product_id| async move {
            (product_id, store.delete_product(product_id).await)
        }))
        .await;

        let failed: Vec<(i32, StoreError)> = results
            .into_iter()
            .filter_map(|(product_id, result)| result.err().map(|err| (product_id, err)))
            .collect();
        if !failed.is_empty() {
            return Err(self.fail(CascadeError::Dependents { kind, id, failed }));
        }

        self.transition(CascadePhase::DeletingResource);
        if let Err(source) = store.delete_resource(kind, id).await {
            return Err(self.fail(CascadeError::Resource { kind, id, source }));
        }

        self.transition(CascadePhase::Done);
        tracing::info!(
            "Deleted {} {} along with {} product(s)",
            kind,
            id,
            product_ids.len()
        );

        Ok(CascadeReport {
            kind,
            resource_id: id,
            deleted_products: product_ids,
        })
    }
}
