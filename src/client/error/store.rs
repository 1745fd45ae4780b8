use thiserror::Error;

use crate::model::resource::ResourceKind;

/// Failure reported by an [`EntityStore`](crate::client::api::EntityStore) operation.
///
/// The client core never inspects the variant to decide what to do next; it only
/// forwards the failure together with [`StoreError::detail`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced record does not exist.
    #[error("{kind} ID {id} not found")]
    NotFound { kind: &'static str, id: i32 },
    /// The store rejected the request's content.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// Transport or storage failure.
    #[error("Operation failed: {0}")]
    Failed(String),
}

impl StoreError {
    pub fn product_not_found(id: i32) -> Self {
        Self::NotFound {
            kind: "product",
            id,
        }
    }

    pub fn resource_not_found(kind: ResourceKind, id: i32) -> Self {
        let kind = match kind {
            ResourceKind::Category => "category",
            ResourceKind::Unit => "unit",
            ResourceKind::Storage => "storage",
        };

        Self::NotFound { kind, id }
    }

    /// Human readable detail to show alongside the generic failure message.
    pub fn detail(&self) -> String {
        match self {
            Self::NotFound { kind, id } => format!("{} {} no longer exists", kind, id),
            Self::Validation(reason) => reason.clone(),
            Self::Failed(reason) => reason.clone(),
        }
    }
}
