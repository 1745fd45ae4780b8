//! Tests for InventoryService against the database-backed store.
//!
//! This module verifies loading the annotated view, scoping it by storage selection,
//! saving minimal patches and deleting resources through the service.

use chrono::{Days, Utc};
use sea_orm::EntityTrait;
use shelfmate::{
    client::{
        error::ClientError,
        service::inventory::InventoryService,
        store::{
            edit::{EditSession, ProductDraft},
            inventory::{InventoryState, LoadStatus},
        },
        view::expiration::ExpirationStatus,
    },
    model::{product::ProductDto, resource::ResourceKind},
    server::service::store::DatabaseStore,
};
use shelfmate_test_utils::prelude::*;

/// Tests the full refresh with resource names resolved.
///
/// Expected: Ok with the expired product first and names taken from the resource tables
#[tokio::test]
async fn refresh_builds_annotated_view() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_inventory_tables()
        .with_category("Dairy")
        .with_unit("Litre")
        .with_storage("Fridge")
        .build()
        .await?;
    let today = Utc::now().date_naive();
    test.inventory()
        .insert_mock_product("Milk", today.checked_add_days(Days::new(10)).unwrap(), 1, 1, 1)
        .await?;
    test.inventory()
        .insert_mock_product("Cream", today.checked_sub_days(Days::new(3)).unwrap(), 1, 1, 1)
        .await?;

    let store = DatabaseStore::new(&test.db);
    let service = InventoryService::new(&store);
    let mut state = InventoryState::default();
    service.refresh(&mut state).await.unwrap();

    let view = service.view(&state);
    assert_eq!(state.status, LoadStatus::Ready);
    assert_eq!(view.len(), 2);
    assert_eq!(view[0].product.name, "Cream");
    assert_eq!(view[0].status(state.expiring_soon_days), ExpirationStatus::Expired);
    assert_eq!(view[1].category_name, "Dairy");
    assert_eq!(view[1].unit_name, "Litre");
    assert_eq!(view[1].storage_name, "Fridge");

    Ok(())
}

/// Tests scoping the product list by storage selection.
///
/// Expected: Ok with products limited to the selected storages, empty for no selection
#[tokio::test]
async fn selection_scopes_products() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_inventory_tables()
        .with_category("Pantry Staples")
        .with_unit("Gram")
        .with_storage("Fridge")
        .with_storage("Pantry")
        .build()
        .await?;
    let date = Utc::now().date_naive();
    test.inventory()
        .insert_mock_product("Butter", date, 1, 1, 1)
        .await?;
    test.inventory()
        .insert_mock_product("Rice", date, 1, 1, 2)
        .await?;

    let store = DatabaseStore::new(&test.db);
    let service = InventoryService::new(&store);
    let mut state = InventoryState::default();
    service.refresh(&mut state).await.unwrap();
    assert_eq!(state.products.len(), 2);

    service.toggle_storage(&mut state, 2).await.unwrap();
    assert_eq!(state.products.len(), 1);
    assert_eq!(state.products[0].name, "Rice");
    assert_eq!(state.selection_label(), "Pantry");

    service.toggle_storage(&mut state, 2).await.unwrap();
    assert!(state.products.is_empty());
    assert_eq!(state.selection_label(), "Select Storages");

    service.select_all_storages(&mut state).await.unwrap();
    assert_eq!(state.products.len(), 2);
    assert_eq!(state.selection_label(), "All Storages");

    Ok(())
}

/// Tests that an edit only writes the changed field.
///
/// The stored name is changed behind the session's back; a quantity-only save must
/// not overwrite it.
///
/// Expected: Ok with the new quantity and the externally changed name preserved
#[tokio::test]
async fn save_sends_only_changed_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_inventory_tables().build().await?;
    let (product, _, _, _) = test
        .inventory()
        .insert_mock_product_with_resources("Milk", Utc::now().date_naive())
        .await?;

    let store = DatabaseStore::new(&test.db);
    let service = InventoryService::new(&store);
    let mut state = InventoryState::default();
    let mut session = EditSession::new(ProductDraft::from(&ProductDto::from(product.clone())));

    let mut renamed: entity::product::ActiveModel = product.clone().into();
    renamed.name = sea_orm::ActiveValue::Set("Oat Milk".to_string());
    entity::prelude::Product::update(renamed)
        .exec(&test.db)
        .await?;

    session.current_mut().quantity = 4;
    let saved = service
        .save_product(&mut state, product.id, &mut session)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(saved.quantity, 4);
    assert_eq!(saved.name, "Oat Milk");

    Ok(())
}

/// Tests deleting a resource through the service.
///
/// Expected: Ok with the storage and its product gone from both the store and the state
#[tokio::test]
async fn delete_resource_cascades_and_reloads() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_inventory_tables().build().await?;
    let (_, _, _, storage) = test
        .inventory()
        .insert_mock_product_with_resources("Milk", Utc::now().date_naive())
        .await?;

    let store = DatabaseStore::new(&test.db);
    let service = InventoryService::new(&store);
    let mut state = InventoryState::default();
    service.refresh(&mut state).await.unwrap();

    let report = service
        .delete_resource(&mut state, ResourceKind::Storage, storage.id)
        .await
        .unwrap();

    assert_eq!(report.deleted_products.len(), 1);
    assert!(state.storages.is_empty());
    assert!(state.products.is_empty());
    assert_eq!(state.categories.len(), 1);

    Ok(())
}

/// Tests that a rejected create leaves the state untouched.
///
/// Expected: Err(Mutation) and no product stored
#[tokio::test]
async fn create_with_missing_category_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_unit("Gram")
        .with_storage("Pantry")
        .build()
        .await?;

    let store = DatabaseStore::new(&test.db);
    let service = InventoryService::new(&store);
    let mut state = InventoryState::default();
    let draft = ProductDraft {
        name: "Rice".to_string(),
        quantity: 1,
        expiration_date: Utc::now().date_naive(),
        category_id: 1,
        unit_id: 1,
        storage_id: 1,
    };

    let result = service.create_product(&mut state, &draft).await;

    assert!(matches!(result, Err(ClientError::Mutation { .. })));
    assert!(entity::prelude::Product::find().all(&test.db).await?.is_empty());

    Ok(())
}
