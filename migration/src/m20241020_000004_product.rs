use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20241020_000001_category::Category, m20241020_000002_unit::Unit,
    m20241020_000003_storage::Storage,
};

static IDX_PRODUCT_CATEGORY_ID: &str = "idx-product-category_id";
static IDX_PRODUCT_UNIT_ID: &str = "idx-product-unit_id";
static IDX_PRODUCT_STORAGE_ID: &str = "idx-product-storage_id";
static FK_PRODUCT_CATEGORY_ID: &str = "fk-product-category_id";
static FK_PRODUCT_UNIT_ID: &str = "fk-product-unit_id";
static FK_PRODUCT_STORAGE_ID: &str = "fk-product-storage_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are inline since SQLite cannot add them later. None of them cascade.
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string(Product::Name))
                    .col(integer(Product::Quantity))
                    .col(date(Product::ExpirationDate))
                    .col(integer(Product::CategoryId))
                    .col(integer(Product::UnitId))
                    .col(integer(Product::StorageId))
                    .col(timestamp(Product::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCT_CATEGORY_ID)
                            .from(Product::Table, Product::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCT_UNIT_ID)
                            .from(Product::Table, Product::UnitId)
                            .to(Unit::Table, Unit::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCT_STORAGE_ID)
                            .from(Product::Table, Product::StorageId)
                            .to(Storage::Table, Storage::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_PRODUCT_CATEGORY_ID, Product::CategoryId),
            (IDX_PRODUCT_UNIT_ID, Product::UnitId),
            (IDX_PRODUCT_STORAGE_ID, Product::StorageId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Product::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            IDX_PRODUCT_STORAGE_ID,
            IDX_PRODUCT_UNIT_ID,
            IDX_PRODUCT_CATEGORY_ID,
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Product::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Name,
    Quantity,
    ExpirationDate,
    CategoryId,
    UnitId,
    StorageId,
    CreatedAt,
}
