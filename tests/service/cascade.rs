//! Tests for CascadeDelete against the database-backed store.
//!
//! This module verifies that deleting a category, unit or storage also removes every
//! product referencing it, that the resource survives when a dependent cannot be
//! deleted, and that a failed cascade can be run again to completion.

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, EntityTrait};
use shelfmate::{
    client::{
        error::CascadeError,
        service::cascade::{CascadeDelete, CascadePhase},
    },
    model::resource::ResourceKind,
    server::service::store::DatabaseStore,
};
use shelfmate_test_utils::prelude::*;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 1).unwrap()
}

/// Tests deleting a category together with its two products.
///
/// Category C holds P1 and P2 while a third product in another category must be
/// left alone.
///
/// Expected: Ok with P1 and P2 reported, C removed, unrelated product kept
#[tokio::test]
async fn deletes_category_with_products() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_inventory_tables()
        .with_category("C")
        .with_category("Other")
        .with_unit("Gram")
        .with_storage("Pantry")
        .build()
        .await?;
    let p1 = test
        .inventory()
        .insert_mock_product("P1", date(), 1, 1, 1)
        .await?;
    let p2 = test
        .inventory()
        .insert_mock_product("P2", date(), 1, 1, 1)
        .await?;
    let p3 = test
        .inventory()
        .insert_mock_product("P3", date(), 2, 1, 1)
        .await?;

    let store = DatabaseStore::new(&test.db);
    let mut cascade = CascadeDelete::new(ResourceKind::Category, 1);
    let report = cascade.run(&store).await.unwrap();

    let mut deleted = report.deleted_products;
    deleted.sort();
    assert_eq!(deleted, vec![p1.id, p2.id]);
    assert_eq!(cascade.phase(), CascadePhase::Done);

    assert!(entity::prelude::Category::find_by_id(1)
        .one(&test.db)
        .await?
        .is_none());
    let remaining = entity::prelude::Product::find().all(&test.db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, p3.id);

    Ok(())
}

/// Tests that a storage without products is deleted directly.
///
/// Expected: Ok with no deleted products and the storage removed
#[tokio::test]
async fn deletes_storage_without_products() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_storage("Cellar")
        .build()
        .await?;

    let store = DatabaseStore::new(&test.db);
    let report = CascadeDelete::new(ResourceKind::Storage, 1)
        .run(&store)
        .await
        .unwrap();

    assert!(report.deleted_products.is_empty());
    assert!(entity::prelude::Storage::find_by_id(1)
        .one(&test.db)
        .await?
        .is_none());

    Ok(())
}

/// Tests that the unit survives when one of its products cannot be deleted.
///
/// A trigger makes deleting P1 fail at the database level, standing in for a store
/// that rejects the request. P2 is still deleted since every dependent delete is
/// attempted.
///
/// Expected: Err(Dependents) naming P1, unit and P1 still present
#[tokio::test]
async fn keeps_unit_when_dependent_delete_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_inventory_tables().build().await?;
    let (p1, _, unit, storage) = test
        .inventory()
        .insert_mock_product_with_resources("P1", date())
        .await?;
    let category = test.inventory().insert_mock_category("Second").await?;
    let p2 = test
        .inventory()
        .insert_mock_product("P2", date(), category.id, unit.id, storage.id)
        .await?;

    test.db
        .execute_unprepared(&format!(
            "CREATE TRIGGER protect_p1 BEFORE DELETE ON product \
             WHEN OLD.id = {} BEGIN SELECT RAISE(ABORT, 'product is locked'); END;",
            p1.id
        ))
        .await?;

    let store = DatabaseStore::new(&test.db);
    let mut cascade = CascadeDelete::new(ResourceKind::Unit, unit.id);
    let result = cascade.run(&store).await;

    match result {
        Err(CascadeError::Dependents { failed, .. }) => {
            assert_eq!(failed.len(), 1);
            assert_eq!(failed[0].0, p1.id);
        }
        other => panic!("expected Dependents error, got {:?}", other),
    }
    assert_eq!(cascade.phase(), CascadePhase::Failed);
    assert!(entity::prelude::Unit::find_by_id(unit.id)
        .one(&test.db)
        .await?
        .is_some());
    assert!(entity::prelude::Product::find_by_id(p1.id)
        .one(&test.db)
        .await?
        .is_some());
    assert!(entity::prelude::Product::find_by_id(p2.id)
        .one(&test.db)
        .await?
        .is_none());

    Ok(())
}

/// Tests running a cascade again after the blocking condition is cleared.
///
/// Expected: Ok on the second run with only the remaining product deleted
#[tokio::test]
async fn retry_completes_after_partial_failure() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_inventory_tables().build().await?;
    let (p1, _, unit, _) = test
        .inventory()
        .insert_mock_product_with_resources("P1", date())
        .await?;

    test.db
        .execute_unprepared(
            "CREATE TRIGGER protect_all BEFORE DELETE ON product \
             BEGIN SELECT RAISE(ABORT, 'product is locked'); END;",
        )
        .await?;

    let store = DatabaseStore::new(&test.db);
    let mut cascade = CascadeDelete::new(ResourceKind::Unit, unit.id);
    assert!(cascade.run(&store).await.is_err());

    test.db
        .execute_unprepared("DROP TRIGGER protect_all;")
        .await?;
    let report = cascade.run(&store).await.unwrap();

    assert_eq!(report.deleted_products, vec![p1.id]);
    assert!(entity::prelude::Unit::find_by_id(unit.id)
        .one(&test.db)
        .await?
        .is_none());

    Ok(())
}
