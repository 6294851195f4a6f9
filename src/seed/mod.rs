//! Seed procedure: inserts a [`Dataset`] in foreign-key dependency order
//! inside one transaction.

mod dataset;

pub use dataset::{Dataset, TableCounts};

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DatabaseTransaction, EntityTrait,
    IntoActiveModel, TransactionTrait,
};
use std::time::Instant;
use tracing::{debug, info};

use crate::db;
use crate::entities::{
    category, customer, inventory, order, order_item, payment, product, product_category, review,
    shipment, supplier, supplier_product,
};
use crate::errors::ServiceError;

/// Inserts `dataset` and commits once.
///
/// Parents go in before the rows that reference them: customers, products,
/// suppliers and categories; then orders, inventory and supplier products;
/// then order items, shipments, payments and reviews; then product
/// categories. If any row is rejected the whole batch is rolled back.
pub async fn seed<C>(db: &C, dataset: &Dataset) -> Result<TableCounts, ServiceError>
where
    C: TransactionTrait,
{
    let start = Instant::now();
    let dataset = dataset.clone();

    info!("Seeding {} rows", dataset.counts().total());
    let counts = db::with_transaction(db, move |txn| {
        Box::pin(async move { insert_dataset(txn, &dataset).await })
    })
    .await?;

    info!(
        rows = counts.total(),
        "Seed committed in {:?}",
        start.elapsed()
    );
    Ok(counts)
}

async fn insert_dataset(
    txn: &DatabaseTransaction,
    data: &Dataset,
) -> Result<TableCounts, ServiceError> {
    let mut counts = TableCounts::default();

    counts.customers = insert_rows(
        txn,
        "customers",
        active::<customer::ActiveModel, _>(&data.customers),
    )
    .await?;
    counts.products = insert_rows(
        txn,
        "products",
        active::<product::ActiveModel, _>(&data.products),
    )
    .await?;
    counts.suppliers = insert_rows(
        txn,
        "suppliers",
        active::<supplier::ActiveModel, _>(&data.suppliers),
    )
    .await?;
    counts.categories = insert_rows(
        txn,
        "categories",
        active::<category::ActiveModel, _>(&data.categories),
    )
    .await?;

    counts.orders = insert_rows(
        txn,
        "orders",
        active::<order::ActiveModel, _>(&data.orders),
    )
    .await?;
    counts.inventory = insert_rows(
        txn,
        "inventory",
        active::<inventory::ActiveModel, _>(&data.inventory),
    )
    .await?;
    counts.supplier_products = insert_rows(
        txn,
        "supplier_products",
        active::<supplier_product::ActiveModel, _>(&data.supplier_products),
    )
    .await?;

    counts.order_items = insert_rows(
        txn,
        "order_items",
        active::<order_item::ActiveModel, _>(&data.order_items),
    )
    .await?;
    counts.shipments = insert_rows(
        txn,
        "shipments",
        active::<shipment::ActiveModel, _>(&data.shipments),
    )
    .await?;
    counts.payments = insert_rows(
        txn,
        "payments",
        active::<payment::ActiveModel, _>(&data.payments),
    )
    .await?;
    counts.reviews = insert_rows(
        txn,
        "reviews",
        active::<review::ActiveModel, _>(&data.reviews),
    )
    .await?;

    counts.product_categories = insert_rows(
        txn,
        "product_categories",
        active::<product_category::ActiveModel, _>(&data.product_categories),
    )
    .await?;

    db::sync_identity_sequences(txn).await?;
    Ok(counts)
}

// Models convert with every column present, ids included, so the insert
// keeps the dataset's keys.
fn active<A, M>(models: &[M]) -> Vec<A>
where
    A: ActiveModelTrait,
    M: IntoActiveModel<A> + Clone,
{
    models
        .iter()
        .cloned()
        .map(IntoActiveModel::into_active_model)
        .collect()
}

async fn insert_rows<C, A>(db: &C, table: &'static str, rows: Vec<A>) -> Result<u64, ServiceError>
where
    C: ConnectionTrait,
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    let count = rows.len() as u64;
    for row in rows {
        row.insert(db).await?;
    }
    debug!(table, rows = count, "Inserted seed rows");
    Ok(count)
}
