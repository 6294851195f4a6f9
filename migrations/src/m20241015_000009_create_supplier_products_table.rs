use sea_orm_migration::prelude::*;

use super::m20241015_000003_create_products_table::Products;
use super::m20241015_000004_create_suppliers_table::Suppliers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupplierProducts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SupplierProducts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SupplierProducts::SupplierId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SupplierProducts::ProductId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supplier_products_supplier_id")
                            .from(SupplierProducts::Table, SupplierProducts::SupplierId)
                            .to(Suppliers::Table, Suppliers::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supplier_products_product_id")
                            .from(SupplierProducts::Table, SupplierProducts::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SupplierProducts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SupplierProducts {
    Table,
    Id,
    SupplierId,
    ProductId,
}
