//! Test fixture modules for database record creation.
//!
//! Fixtures insert records during test execution (Phase 2 of the test architecture),
//! after the `TestBuilder` has created the schema.
//!
//! - `inventory` - categories, units, storages and the products referencing them

pub mod inventory;
