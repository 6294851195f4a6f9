//! Referential integrity scan over a [`Dataset`].

use std::collections::HashSet;
use std::fmt;

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::ServiceError;
use crate::seed::Dataset;

/// A child row whose foreign key has no matching parent row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub table: &'static str,
    pub column: &'static str,
    pub row_id: i32,
    pub parent_table: &'static str,
    pub missing_id: i32,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} = {} (row {}) has no matching row in {}",
            self.table, self.column, self.missing_id, self.row_id, self.parent_table
        )
    }
}

struct ForeignKey {
    table: &'static str,
    column: &'static str,
    parent_table: &'static str,
}

fn fk(table: &'static str, column: &'static str, parent_table: &'static str) -> ForeignKey {
    ForeignKey {
        table,
        column,
        parent_table,
    }
}

fn ids<T>(rows: &[T], id: impl Fn(&T) -> i32) -> HashSet<i32> {
    rows.iter().map(id).collect()
}

fn scan<T>(
    found: &mut Vec<DanglingReference>,
    fk: ForeignKey,
    parents: &HashSet<i32>,
    rows: &[T],
    key: impl Fn(&T) -> (i32, i32),
) {
    for row in rows {
        let (row_id, parent_id) = key(row);
        if !parents.contains(&parent_id) {
            found.push(DanglingReference {
                table: fk.table,
                column: fk.column,
                row_id,
                parent_table: fk.parent_table,
                missing_id: parent_id,
            });
        }
    }
}

/// Every foreign key in `data` that does not resolve within `data`, in
/// table dependency order.
pub fn dangling_references(data: &Dataset) -> Vec<DanglingReference> {
    let customers = ids(&data.customers, |r| r.id);
    let products = ids(&data.products, |r| r.id);
    let suppliers = ids(&data.suppliers, |r| r.id);
    let categories = ids(&data.categories, |r| r.id);
    let orders = ids(&data.orders, |r| r.id);

    let mut found = Vec::new();

    scan(&mut found, fk("orders", "customer_id", "customers"), &customers, &data.orders, |r| {
        (r.id, r.customer_id)
    });
    scan(&mut found, fk("inventory", "product_id", "products"), &products, &data.inventory, |r| {
        (r.id, r.product_id)
    });
    scan(
        &mut found,
        fk("supplier_products", "supplier_id", "suppliers"),
        &suppliers,
        &data.supplier_products,
        |r| (r.id, r.supplier_id),
    );
    scan(
        &mut found,
        fk("supplier_products", "product_id", "products"),
        &products,
        &data.supplier_products,
        |r| (r.id, r.product_id),
    );
    scan(&mut found, fk("order_items", "order_id", "orders"), &orders, &data.order_items, |r| {
        (r.id, r.order_id)
    });
    scan(
        &mut found,
        fk("order_items", "product_id", "products"),
        &products,
        &data.order_items,
        |r| (r.id, r.product_id),
    );
    scan(&mut found, fk("shipments", "order_id", "orders"), &orders, &data.shipments, |r| {
        (r.id, r.order_id)
    });
    scan(&mut found, fk("payments", "order_id", "orders"), &orders, &data.payments, |r| {
        (r.id, r.order_id)
    });
    scan(&mut found, fk("reviews", "product_id", "products"), &products, &data.reviews, |r| {
        (r.id, r.product_id)
    });
    scan(&mut found, fk("reviews", "customer_id", "customers"), &customers, &data.reviews, |r| {
        (r.id, r.customer_id)
    });
    scan(
        &mut found,
        fk("product_categories", "product_id", "products"),
        &products,
        &data.product_categories,
        |r| (r.id, r.product_id),
    );
    scan(
        &mut found,
        fk("product_categories", "category_id", "categories"),
        &categories,
        &data.product_categories,
        |r| (r.id, r.category_id),
    );

    found
}

/// Loads every table and reports child rows whose parent is missing.
///
/// A store that enforces foreign keys always yields an empty list; the scan
/// exists for stores opened with enforcement disabled.
pub async fn find_dangling_references<C>(db: &C) -> Result<Vec<DanglingReference>, ServiceError>
where
    C: ConnectionTrait,
{
    let snapshot = Dataset::load(db).await?;
    let found = dangling_references(&snapshot);

    if found.is_empty() {
        info!("Referential integrity check passed");
    } else {
        for dangling in &found {
            warn!("{}", dangling);
        }
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn empty_dataset_has_no_dangling_references() {
        assert!(dangling_references(&Dataset::default()).is_empty());
    }

    #[test]
    fn orphaned_children_are_reported_in_dependency_order() {
        let mut data = Dataset::sample(Utc::now());
        data.customers.clear();

        let found = dangling_references(&data);
        // 5 orders and 5 reviews point at customers.
        assert_eq!(found.len(), 10);
        assert!(found[..5].iter().all(|d| d.table == "orders"));
        assert!(found[5..].iter().all(|d| d.table == "reviews"));
        assert!(found.iter().all(|d| d.parent_table == "customers"));
    }

    #[test]
    fn display_names_table_column_and_parent() {
        let dangling = DanglingReference {
            table: "payments",
            column: "order_id",
            row_id: 2,
            parent_table: "orders",
            missing_id: 9,
        };
        assert_eq!(
            dangling.to_string(),
            "payments.order_id = 9 (row 2) has no matching row in orders"
        );
    }
}
