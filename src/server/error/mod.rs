//! Error types for the Shelfmate server side.
//!
//! Covers what can go wrong before the client core is running: loading configuration,
//! connecting to the database and applying migrations. Failures of individual store
//! operations are reported through [`StoreError`](crate::client::error::StoreError)
//! instead.

pub mod config;

use thiserror::Error;

use crate::{client::error::ClientError, server::error::config::ConfigError};

/// Main error type for the Shelfmate binary.
///
/// Aggregates configuration, database and client errors so `?` can be used throughout
/// startup.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (connection failures, migration failures).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Inventory operation failed after startup.
    #[error(transparent)]
    ClientError(#[from] ClientError),
}
