//! Server-side modules.
//!
//! Everything needed to run the inventory against a real database: configuration, the
//! sea-orm repositories, the [`EntityStore`](crate::client::api::EntityStore)
//! implementation built on them, and startup helpers for the binary.

pub mod config;
pub mod data;
pub mod error;
pub mod service;
pub mod startup;
