mod common;

use assert_matches::assert_matches;
use chrono::Duration;
use rstest::rstest;
use rust_decimal_macros::dec;
use sea_orm::EntityTrait;

use commerce_schema::{
    entities::{order, order_item, payment, shipment},
    find_dangling_references, queries, seed, Dataset, ServiceError,
};

use common::{reference_time, sample, TestDb};

#[rstest]
#[case("customers", 5)]
#[case("products", 5)]
#[case("suppliers", 3)]
#[case("categories", 3)]
#[case("orders", 5)]
#[case("inventory", 5)]
#[case("supplier_products", 5)]
#[case("order_items", 7)]
#[case("shipments", 5)]
#[case("payments", 5)]
#[case("reviews", 5)]
#[case("product_categories", 5)]
#[tokio::test]
async fn seeding_fills_every_table(#[case] table: &str, #[case] expected: u64) {
    let test_db = TestDb::seeded().await;
    let counts = test_db.counts().await;

    let rows = counts
        .as_pairs()
        .into_iter()
        .find(|(name, _)| *name == table)
        .map(|(_, rows)| rows);
    assert_eq!(rows, Some(expected), "row count of {table}");
}

#[tokio::test]
async fn seed_reports_what_it_inserted() {
    let test_db = TestDb::new().await;
    let inserted = seed(&test_db.pool, &sample()).await.expect("seed");

    assert_eq!(inserted, sample().counts());
    assert_eq!(inserted, test_db.counts().await);
}

#[tokio::test]
async fn stored_rows_match_the_dataset() {
    let test_db = TestDb::seeded().await;
    let loaded = Dataset::load(&test_db.pool).await.expect("load snapshot");
    assert_eq!(loaded, sample());
}

#[tokio::test]
async fn first_order_has_its_customer_items_and_payment() {
    let test_db = TestDb::seeded().await;
    let details = queries::order_details(&test_db.pool, 1)
        .await
        .expect("order 1");

    assert_eq!(details.order.customer_id, 1);
    assert_eq!(details.customer.name, "John Doe");
    assert_eq!(details.order.notes.as_deref(), Some("Urgent delivery"));
    assert_eq!(details.order.amount_total, dec!(1600.0));

    let items: Vec<_> = details
        .items
        .iter()
        .map(|i| (i.product_id, i.quantity, i.price))
        .collect();
    assert_eq!(items, vec![(1, 1, dec!(1000.0)), (4, 4, dec!(150.0))]);

    assert_eq!(details.payments.len(), 1);
    assert_eq!(details.payments[0].amount, dec!(1600.0));
    assert_eq!(details.shipments.len(), 1);
}

#[tokio::test]
async fn timestamps_round_trip() {
    let test_db = TestDb::seeded().await;
    let now = reference_time();

    let shipments = shipment::Entity::find()
        .all(&test_db.pool)
        .await
        .expect("shipments");
    let mut dates: Vec<_> = shipments.iter().map(|s| (s.id, s.shipment_date)).collect();
    dates.sort_by_key(|(id, _)| *id);
    assert_eq!(
        dates,
        vec![
            (1, Some(now)),
            (2, Some(now + Duration::days(2))),
            (3, Some(now + Duration::days(1))),
            (4, Some(now)),
            (5, Some(now + Duration::days(3))),
        ]
    );

    let order = order::Entity::find_by_id(3)
        .one(&test_db.pool)
        .await
        .expect("query")
        .expect("order 3");
    assert_eq!(order.order_date, now);

    let payment = payment::Entity::find_by_id(5)
        .one(&test_db.pool)
        .await
        .expect("query")
        .expect("payment 5");
    assert_eq!(payment.payment_date, now);
}

#[tokio::test]
async fn reseeding_conflicts_and_leaves_rows_alone() {
    let test_db = TestDb::seeded().await;
    let before = test_db.counts().await;

    let err = seed(&test_db.pool, &sample())
        .await
        .expect_err("second seed must fail");
    assert_matches!(err, ServiceError::Conflict(_));

    assert_eq!(test_db.counts().await, before);
    assert_eq!(test_db.counts().await.customers, 5);
}

#[tokio::test]
async fn broken_reference_rolls_back_everything() {
    let test_db = TestDb::new().await;
    let mut data = sample();
    data.reviews[2].customer_id = 42;

    let err = seed(&test_db.pool, &data)
        .await
        .expect_err("seed must fail");
    assert_matches!(err, ServiceError::ReferentialIntegrity(_));

    assert_eq!(test_db.counts().await.total(), 0);
}

#[tokio::test]
async fn seeded_store_has_no_dangling_references() {
    let test_db = TestDb::seeded().await;
    let found = find_dangling_references(&test_db.pool)
        .await
        .expect("scan");
    assert!(found.is_empty(), "unexpected: {found:?}");
}

#[tokio::test]
async fn dangling_references_are_found_when_enforcement_is_off() {
    let test_db = TestDb::seeded().await;
    test_db.disable_foreign_keys().await;

    order_item::Entity::delete_by_id(7)
        .exec(&test_db.pool)
        .await
        .expect("delete item");
    order::Entity::delete_by_id(5)
        .exec(&test_db.pool)
        .await
        .expect("delete order");

    let found = find_dangling_references(&test_db.pool)
        .await
        .expect("scan");
    let tables: Vec<_> = found.iter().map(|d| (d.table, d.row_id)).collect();
    assert_eq!(tables, vec![("shipments", 5), ("payments", 5)]);
    assert!(found.iter().all(|d| d.missing_id == 5));
}

#[tokio::test]
async fn item_totals_match_order_totals_for_the_first_order() {
    let test_db = TestDb::seeded().await;
    let orders = queries::orders_with_items(&test_db.pool)
        .await
        .expect("orders with items");

    assert_eq!(orders.len(), 5);
    let (first, items) = &orders[0];
    let total: rust_decimal::Decimal = items
        .iter()
        .map(|i| i.price * rust_decimal::Decimal::from(i.quantity))
        .sum();
    assert_eq!(total, first.amount_total);
    assert_eq!(
        orders.iter().map(|(_, items)| items.len()).collect::<Vec<_>>(),
        vec![2, 2, 1, 1, 1]
    );
}
