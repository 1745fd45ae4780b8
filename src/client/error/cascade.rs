use thiserror::Error;

use crate::{client::error::StoreError, model::resource::ResourceKind};

/// Failure of a cascading resource delete, tagged with the phase that failed.
///
/// Whatever the variant, the resource itself still exists afterwards and the
/// delete can be issued again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CascadeError {
    #[error("Failed to list products referencing {kind} ID {id}: {source}")]
    Listing {
        kind: ResourceKind,
        id: i32,
        source: StoreError,
    },
    #[error(
        "Failed to delete {} product(s) referencing {kind} ID {id}, the {kind} was not deleted",
        .failed.len()
    )]
    Dependents {
        kind: ResourceKind,
        id: i32,
        /// Every product whose delete failed, with the reason.
        failed: Vec<(i32, StoreError)>,
    },
    #[error("Failed to delete {kind} ID {id} after removing its products: {source}")]
    Resource {
        kind: ResourceKind,
        id: i32,
        source: StoreError,
    },
}

impl CascadeError {
    pub fn detail(&self) -> String {
        match self {
            Self::Listing { source, .. } | Self::Resource { source, .. } => source.detail(),
            Self::Dependents { failed, .. } => failed
                .iter()
                .map(|(product_id, err)| format!("product {}: {}", product_id, err.detail()))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}
