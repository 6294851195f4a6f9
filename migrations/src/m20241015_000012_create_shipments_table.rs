use sea_orm_migration::prelude::*;

use super::m20241015_000006_create_orders_table::Orders;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shipments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Shipments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Shipments::OrderId).integer().not_null())
                    .col(
                        ColumnDef::new(Shipments::ShipmentDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipments_order_id")
                            .from(Shipments::Table, Shipments::OrderId)
                            .to(Orders::Table, Orders::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shipments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shipments {
    Table,
    Id,
    OrderId,
    ShipmentDate,
}
