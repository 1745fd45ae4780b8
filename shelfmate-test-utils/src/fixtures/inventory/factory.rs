//! Factory functions for generating mock inventory database models.
//!
//! Provides pure functions for creating models with standard test values. These are
//! in-memory model instances that don't require database interaction, suitable for unit tests.

use chrono::{NaiveDate, Utc};

/// Create a mock product database model for testing.
///
/// # Arguments
/// - `id` - Product record ID
/// - `name` - Product name
/// - `expiration_date` - Calendar date the product expires on
///
/// # Returns
/// - `entity::product::Model` - A product referencing category, unit and storage `1`
pub fn mock_product_model(
    id: i32,
    name: &str,
    expiration_date: NaiveDate,
) -> entity::product::Model {
    entity::product::Model {
        id,
        name: name.to_string(),
        quantity: 1,
        expiration_date,
        category_id: 1,
        unit_id: 1,
        storage_id: 1,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock category database model for testing.
pub fn mock_category_model(id: i32, name: &str) -> entity::category::Model {
    entity::category::Model {
        id,
        name: name.to_string(),
    }
}

/// Create a mock unit database model for testing.
pub fn mock_unit_model(id: i32, name: &str) -> entity::unit::Model {
    entity::unit::Model {
        id,
        name: name.to_string(),
    }
}

/// Create a mock storage database model for testing.
pub fn mock_storage_model(id: i32, name: &str) -> entity::storage::Model {
    entity::storage::Model {
        id,
        name: name.to_string(),
    }
}
