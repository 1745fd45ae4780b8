//! Storage multi-select with an "all storages" sentinel.

use std::collections::BTreeSet;

use crate::model::resource::ResourceDto;

/// Which storages the product list is scoped to.
///
/// `All` and explicit ids are mutually exclusive. Deselecting the last explicit id
/// leaves an empty selection rather than falling back to `All`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StorageSelection {
    #[default]
    All,
    Storages(BTreeSet<i32>),
}

/// The product query a selection translates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchScope {
    /// Every product, unscoped.
    Unscoped,
    /// Products in any of these storages.
    Storages(Vec<i32>),
    /// Nothing is selected, so no request is made.
    Nothing,
}

impl StorageSelection {
    pub fn select_all(&mut self) {
        *self = StorageSelection::All;
    }

    /// Adds or removes a concrete storage, dropping the `All` sentinel if present.
    pub fn toggle(&mut self, storage_id: i32) {
        match self {
            StorageSelection::All => {
                *self = StorageSelection::Storages(BTreeSet::from([storage_id]));
            }
            StorageSelection::Storages(ids) => {
                if !ids.remove(&storage_id) {
                    ids.insert(storage_id);
                }
            }
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StorageSelection::All)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, StorageSelection::Storages(ids) if ids.is_empty())
    }

    pub fn contains(&self, storage_id: i32) -> bool {
        match self {
            StorageSelection::All => false,
            StorageSelection::Storages(ids) => ids.contains(&storage_id),
        }
    }

    pub fn scope(&self) -> FetchScope {
        match self {
            StorageSelection::All => FetchScope::Unscoped,
            StorageSelection::Storages(ids) if ids.is_empty() => FetchScope::Nothing,
            StorageSelection::Storages(ids) => FetchScope::Storages(ids.iter().copied().collect()),
        }
    }

    /// Text for the selector button.
    pub fn label(&self, storages: &[ResourceDto]) -> String {
        match self {
            StorageSelection::All => "All Storages".to_string(),
            StorageSelection::Storages(ids) if ids.is_empty() => "Select Storages".to_string(),
            StorageSelection::Storages(ids) => storages
                .iter()
                .filter(|storage| ids.contains(&storage.id))
                .map(|storage| storage.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
