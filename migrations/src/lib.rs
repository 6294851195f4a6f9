pub use sea_orm_migration::prelude::*;

mod m20241015_000001_create_categories_table;
mod m20241015_000002_create_customers_table;
mod m20241015_000003_create_products_table;
mod m20241015_000004_create_suppliers_table;
mod m20241015_000005_create_inventory_table;
mod m20241015_000006_create_orders_table;
mod m20241015_000007_create_product_categories_table;
mod m20241015_000008_create_reviews_table;
mod m20241015_000009_create_supplier_products_table;
mod m20241015_000010_create_order_items_table;
mod m20241015_000011_create_payments_table;
mod m20241015_000012_create_shipments_table;

pub struct Migrator;

/// Parents are created before the tables that reference them.
#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241015_000001_create_categories_table::Migration),
            Box::new(m20241015_000002_create_customers_table::Migration),
            Box::new(m20241015_000003_create_products_table::Migration),
            Box::new(m20241015_000004_create_suppliers_table::Migration),
            Box::new(m20241015_000005_create_inventory_table::Migration),
            Box::new(m20241015_000006_create_orders_table::Migration),
            Box::new(m20241015_000007_create_product_categories_table::Migration),
            Box::new(m20241015_000008_create_reviews_table::Migration),
            Box::new(m20241015_000009_create_supplier_products_table::Migration),
            Box::new(m20241015_000010_create_order_items_table::Migration),
            Box::new(m20241015_000011_create_payments_table::Migration),
            Box::new(m20241015_000012_create_shipments_table::Migration),
        ]
    }
}

/// Table names in creation order.
pub const TABLES: [&str; 12] = [
    "categories",
    "customers",
    "products",
    "suppliers",
    "inventory",
    "orders",
    "product_categories",
    "reviews",
    "supplier_products",
    "order_items",
    "payments",
    "shipments",
];
