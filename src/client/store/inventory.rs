//! Owned view-model for the inventory screens.
//!
//! Collections are replaced wholesale whenever a response arrives; the annotated view is
//! recomputed from them on demand rather than stored.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;

use crate::{
    client::{
        error::ClientError,
        store::selection::{FetchScope, StorageSelection},
        view::{
            expiration::{annotate_all, AnnotatedProduct, ResourceNames, DEFAULT_EXPIRING_SOON_DAYS},
            filter_sort::{filter_and_sort, filter_resources, SortState},
        },
    },
    model::{
        product::ProductDto,
        resource::{ResourceDto, ResourceKind},
    },
};

/// Load state of the product list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// The last fetch failed; holds the detail shown to the user.
    Failed(String),
}

/// Token for one product fetch. Only the most recently issued ticket may apply its
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    id: u64,
    scope: FetchScope,
}

impl FetchTicket {
    pub fn scope(&self) -> &FetchScope {
        &self.scope
    }
}

#[derive(Debug, Clone)]
pub struct InventoryState {
    pub products: Vec<ProductDto>,
    pub categories: Vec<ResourceDto>,
    pub units: Vec<ResourceDto>,
    pub storages: Vec<ResourceDto>,
    pub selection: StorageSelection,
    pub query: String,
    pub sort: SortState,
    pub status: LoadStatus,
    pub expiring_soon_days: u64,
    latest_fetch: u64,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::new(DEFAULT_EXPIRING_SOON_DAYS)
    }
}

impl InventoryState {
    pub fn new(expiring_soon_days: u64) -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            units: Vec::new(),
            storages: Vec::new(),
            selection: StorageSelection::default(),
            query: String::new(),
            sort: SortState::default(),
            status: LoadStatus::Idle,
            expiring_soon_days,
            latest_fetch: 0,
        }
    }

    pub fn resources(&self, kind: ResourceKind) -> &[ResourceDto] {
        match kind {
            ResourceKind::Category => &self.categories,
            ResourceKind::Unit => &self.units,
            ResourceKind::Storage => &self.storages,
        }
    }

    pub fn set_resources(&mut self, kind: ResourceKind, resources: Vec<ResourceDto>) {
        match kind {
            ResourceKind::Category => self.categories = resources,
            ResourceKind::Unit => self.units = resources,
            ResourceKind::Storage => self.storages = resources,
        }
    }

    /// Issues a ticket for a new product fetch, superseding any fetch still in flight.
    pub fn begin_product_fetch(&mut self) -> FetchTicket {
        self.latest_fetch += 1;
        self.status = LoadStatus::Loading;

        FetchTicket {
            id: self.latest_fetch,
            scope: self.selection.scope(),
        }
    }

    /// Applies a fetch response if its ticket is still the latest.
    ///
    /// Returns `false` when the response was stale and discarded. A failed fetch clears
    /// the product list so an old list is never shown next to the error.
    pub fn complete_product_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<ProductDto>, ClientError>,
    ) -> bool {
        if ticket.id != self.latest_fetch {
            tracing::debug!(
                "Discarding stale product response {} (latest is {})",
                ticket.id,
                self.latest_fetch
            );
            return false;
        }

        match result {
            Ok(products) => {
                self.products = products;
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                self.products.clear();
                self.status = LoadStatus::Failed(err.detail().unwrap_or_else(|| err.to_string()));
            }
        }

        true
    }

    /// Annotated, filtered and sorted products as of `now`.
    pub fn view(&self, now: DateTime<Utc>) -> Vec<AnnotatedProduct> {
        if matches!(self.status, LoadStatus::Failed(_)) {
            return Vec::new();
        }

        let names = ResourceNames::new(&self.categories, &self.units, &self.storages);
        filter_and_sort(annotate_all(&self.products, &names, now), &self.query, self.sort)
    }

    pub fn resource_view(&self, kind: ResourceKind, query: &str) -> Vec<ResourceDto> {
        filter_resources(self.resources(kind), query)
    }

    pub fn selection_label(&self) -> String {
        self.selection.label(&self.storages)
    }
}
