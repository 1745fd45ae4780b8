//! Error types for the inventory client.
//!
//! Failures are grouped by what the user was doing when they happened. Store failures
//! are never retried automatically.

pub mod cascade;
pub mod store;

pub use cascade::CascadeError;
pub use store::StoreError;

use thiserror::Error;

/// Main error type for client operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A list or lookup request failed; the affected collection is left in an error state.
    #[error("Failed to load {what}: {source}")]
    Fetch {
        what: &'static str,
        source: StoreError,
    },
    /// A create, update or delete failed; local state was left unchanged.
    #[error("Failed to {action}: {source}")]
    Mutation { action: String, source: StoreError },
    /// A cascading resource delete aborted.
    #[error(transparent)]
    Cascade(#[from] CascadeError),
    /// The edited record failed validation before any request was sent.
    #[error("Please fill out all fields: {0}")]
    InvalidInput(String),
}

impl ClientError {
    /// Optional human readable detail for presentation next to a generic failure message.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Fetch { source, .. } | Self::Mutation { source, .. } => Some(source.detail()),
            Self::Cascade(err) => Some(err.detail()),
            Self::InvalidInput(reason) => Some(reason.clone()),
        }
    }
}
