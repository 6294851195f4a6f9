use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::entities::{
    category, customer, inventory, order, order_item, payment, product, product_category, review,
    shipment, supplier, supplier_product,
};
use crate::errors::ServiceError;
use crate::integrity::{self, DanglingReference};

/// The contents of all twelve tables.
///
/// Used both as the literal seed input and as a snapshot loaded back from
/// the store. Ids are explicit, so children reference parents without
/// relying on generated keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub customers: Vec<customer::Model>,
    pub products: Vec<product::Model>,
    pub suppliers: Vec<supplier::Model>,
    pub categories: Vec<category::Model>,
    pub orders: Vec<order::Model>,
    pub inventory: Vec<inventory::Model>,
    pub supplier_products: Vec<supplier_product::Model>,
    pub order_items: Vec<order_item::Model>,
    pub shipments: Vec<shipment::Model>,
    pub payments: Vec<payment::Model>,
    pub reviews: Vec<review::Model>,
    pub product_categories: Vec<product_category::Model>,
}

/// Row count per table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCounts {
    pub customers: u64,
    pub products: u64,
    pub suppliers: u64,
    pub categories: u64,
    pub orders: u64,
    pub inventory: u64,
    pub supplier_products: u64,
    pub order_items: u64,
    pub shipments: u64,
    pub payments: u64,
    pub reviews: u64,
    pub product_categories: u64,
}

impl TableCounts {
    pub fn total(&self) -> u64 {
        self.as_pairs().iter().map(|(_, n)| n).sum()
    }

    /// `(table name, rows)` in seed order.
    pub fn as_pairs(&self) -> [(&'static str, u64); 12] {
        [
            ("customers", self.customers),
            ("products", self.products),
            ("suppliers", self.suppliers),
            ("categories", self.categories),
            ("orders", self.orders),
            ("inventory", self.inventory),
            ("supplier_products", self.supplier_products),
            ("order_items", self.order_items),
            ("shipments", self.shipments),
            ("payments", self.payments),
            ("reviews", self.reviews),
            ("product_categories", self.product_categories),
        ]
    }
}

// Ids are 1-based positions in each list.
fn position_id(index: usize) -> i32 {
    index as i32 + 1
}

impl Dataset {
    /// The fixed sample data. Order, payment and shipment timestamps are
    /// anchored at `now`.
    pub fn sample(now: DateTime<Utc>) -> Self {
        let customers = [
            ("John Doe", dec!(500.0), dec!(1500.0)),
            ("Jane Smith", dec!(250.0), dec!(1000.0)),
            ("Alice Johnson", dec!(300.0), dec!(1200.0)),
            ("Emily Davis", dec!(0.0), dec!(2000.0)),
            ("Michael Brown", dec!(450.0), dec!(1300.0)),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (name, balance, credit_limit))| customer::Model {
            id: position_id(i),
            name: name.to_string(),
            balance,
            credit_limit,
        })
        .collect();

        let products = [
            ("Laptop", dec!(1000.0)),
            ("Smartphone", dec!(600.0)),
            ("Tablet", dec!(400.0)),
            ("Headphones", dec!(150.0)),
            ("Monitor", dec!(300.0)),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (name, price))| product::Model {
            id: position_id(i),
            name: name.to_string(),
            price,
        })
        .collect();

        let orders = [
            (1, "Urgent delivery", dec!(1600.0)),
            (2, "Include gift wrap", dec!(450.0)),
            (3, "Set up required", dec!(700.0)),
            (5, "Deliver to work address", dec!(1200.0)),
            (4, "Delayed payment", dec!(240.0)),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (customer_id, notes, amount_total))| order::Model {
            id: position_id(i),
            customer_id,
            order_date: now,
            notes: Some(notes.to_string()),
            amount_total,
        })
        .collect();

        let order_items = [
            (1, 1, 1, dec!(1000.0)),
            (1, 4, 4, dec!(150.0)),
            (2, 2, 1, dec!(600.0)),
            (2, 3, 2, dec!(300.0)),
            (3, 5, 1, dec!(300.0)),
            (4, 1, 1, dec!(1000.0)),
            (5, 3, 1, dec!(400.0)),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (order_id, product_id, quantity, price))| order_item::Model {
            id: position_id(i),
            order_id,
            product_id,
            quantity,
            price,
        })
        .collect();

        let inventory = [(1, 50), (2, 30), (3, 20), (4, 100), (5, 40)]
            .into_iter()
            .enumerate()
            .map(|(i, (product_id, stock))| inventory::Model {
                id: position_id(i),
                product_id,
                stock,
            })
            .collect();

        let suppliers = [
            ("Tech Supplies Co", "info@techsupplies.com"),
            ("Gadget Provisioners", "sales@gadgets.com"),
            ("Digital Devices Ltd", "support@digitaldevices.com"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (name, contact))| supplier::Model {
            id: position_id(i),
            name: name.to_string(),
            contact_info: Some(contact.to_string()),
        })
        .collect();

        let supplier_products = [(1, 1), (1, 2), (2, 3), (2, 4), (3, 5)]
            .into_iter()
            .enumerate()
            .map(|(i, (supplier_id, product_id))| supplier_product::Model {
                id: position_id(i),
                supplier_id,
                product_id,
            })
            .collect();

        let shipments = [(1, 0), (2, 2), (3, 1), (4, 0), (5, 3)]
            .into_iter()
            .enumerate()
            .map(|(i, (order_id, days_out))| shipment::Model {
                id: position_id(i),
                order_id,
                shipment_date: Some(now + Duration::days(days_out)),
            })
            .collect();

        let categories = ["Electronics", "Accessories", "Computers"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| category::Model {
                id: position_id(i),
                name: name.to_string(),
            })
            .collect();

        let product_categories = [(1, 1), (1, 3), (2, 1), (3, 1), (4, 2)]
            .into_iter()
            .enumerate()
            .map(|(i, (product_id, category_id))| product_category::Model {
                id: position_id(i),
                product_id,
                category_id,
            })
            .collect();

        let payments = [
            (1, dec!(1600.0)),
            (2, dec!(450.0)),
            (3, dec!(700.0)),
            (4, dec!(1200.0)),
            (5, dec!(240.0)),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (order_id, amount))| payment::Model {
            id: position_id(i),
            order_id,
            amount,
            payment_date: now,
        })
        .collect();

        let reviews = [
            (1, 1, "Great product, fast delivery!", 5),
            (2, 2, "Satisfactory but could be better.", 3),
            (3, 5, "Perfect tablet for my needs!", 4),
            (4, 3, "The headphones are amazing!", 5),
            (5, 4, "Decent monitor for the price.", 4),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (product_id, customer_id, text, rating))| review::Model {
            id: position_id(i),
            product_id,
            customer_id,
            review_text: Some(text.to_string()),
            rating,
        })
        .collect();

        Self {
            customers,
            products,
            suppliers,
            categories,
            orders,
            inventory,
            supplier_products,
            order_items,
            shipments,
            payments,
            reviews,
            product_categories,
        }
    }

    /// Reads every table back, each ordered by id.
    pub async fn load<C>(db: &C) -> Result<Self, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(Self {
            customers: customer::Entity::find()
                .order_by_asc(customer::Column::Id)
                .all(db)
                .await?,
            products: product::Entity::find()
                .order_by_asc(product::Column::Id)
                .all(db)
                .await?,
            suppliers: supplier::Entity::find()
                .order_by_asc(supplier::Column::Id)
                .all(db)
                .await?,
            categories: category::Entity::find()
                .order_by_asc(category::Column::Id)
                .all(db)
                .await?,
            orders: order::Entity::find()
                .order_by_asc(order::Column::Id)
                .all(db)
                .await?,
            inventory: inventory::Entity::find()
                .order_by_asc(inventory::Column::Id)
                .all(db)
                .await?,
            supplier_products: supplier_product::Entity::find()
                .order_by_asc(supplier_product::Column::Id)
                .all(db)
                .await?,
            order_items: order_item::Entity::find()
                .order_by_asc(order_item::Column::Id)
                .all(db)
                .await?,
            shipments: shipment::Entity::find()
                .order_by_asc(shipment::Column::Id)
                .all(db)
                .await?,
            payments: payment::Entity::find()
                .order_by_asc(payment::Column::Id)
                .all(db)
                .await?,
            reviews: review::Entity::find()
                .order_by_asc(review::Column::Id)
                .all(db)
                .await?,
            product_categories: product_category::Entity::find()
                .order_by_asc(product_category::Column::Id)
                .all(db)
                .await?,
        })
    }

    pub fn counts(&self) -> TableCounts {
        TableCounts {
            customers: self.customers.len() as u64,
            products: self.products.len() as u64,
            suppliers: self.suppliers.len() as u64,
            categories: self.categories.len() as u64,
            orders: self.orders.len() as u64,
            inventory: self.inventory.len() as u64,
            supplier_products: self.supplier_products.len() as u64,
            order_items: self.order_items.len() as u64,
            shipments: self.shipments.len() as u64,
            payments: self.payments.len() as u64,
            reviews: self.reviews.len() as u64,
            product_categories: self.product_categories.len() as u64,
        }
    }

    /// Foreign keys that do not resolve to a row of this dataset.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        integrity::dangling_references(self)
    }

    /// Fails on the first foreign key that does not resolve within the
    /// dataset itself.
    pub fn check_references(&self) -> Result<(), ServiceError> {
        match self.dangling_references().into_iter().next() {
            None => Ok(()),
            Some(dangling) => Err(ServiceError::ReferentialIntegrity(dangling.to_string())),
        }
    }

    /// Sum of every order item's `quantity * price` for `order_id`.
    pub fn item_total(&self, order_id: i32) -> Decimal {
        self.order_items
            .iter()
            .filter(|item| item.order_id == order_id)
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    fn reference_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 15, 15, 46, 55).unwrap()
    }

    #[test]
    fn sample_has_the_documented_row_counts() {
        let counts = Dataset::sample(reference_time()).counts();
        assert_eq!(
            counts,
            TableCounts {
                customers: 5,
                products: 5,
                suppliers: 3,
                categories: 3,
                orders: 5,
                inventory: 5,
                supplier_products: 5,
                order_items: 7,
                shipments: 5,
                payments: 5,
                reviews: 5,
                product_categories: 5,
            }
        );
        assert_eq!(counts.total(), 58);
    }

    #[test]
    fn ids_are_one_based_positions() {
        let data = Dataset::sample(reference_time());
        let ids: Vec<i32> = data.order_items.iter().map(|i| i.id).collect();
        assert_eq!(ids, (1..=7).collect::<Vec<_>>());
        assert_eq!(data.customers[4].name, "Michael Brown");
        assert_eq!(data.customers[4].id, 5);
    }

    #[test]
    fn sample_references_resolve() {
        let data = Dataset::sample(reference_time());
        assert!(data.dangling_references().is_empty());
        assert!(data.check_references().is_ok());
    }

    #[test]
    fn broken_reference_is_reported() {
        let mut data = Dataset::sample(reference_time());
        data.reviews[2].customer_id = 42;

        let dangling = data.dangling_references();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].table, "reviews");
        assert_eq!(dangling[0].column, "customer_id");
        assert_eq!(dangling[0].row_id, 3);
        assert_eq!(dangling[0].missing_id, 42);
        assert_matches!(
            data.check_references(),
            Err(ServiceError::ReferentialIntegrity(msg)) if msg.contains("reviews")
        );
    }

    #[test]
    fn shipment_dates_are_offset_from_reference_time() {
        let now = reference_time();
        let data = Dataset::sample(now);
        let dates: Vec<_> = data.shipments.iter().map(|s| s.shipment_date).collect();
        assert_eq!(
            dates,
            vec![
                Some(now),
                Some(now + Duration::days(2)),
                Some(now + Duration::days(1)),
                Some(now),
                Some(now + Duration::days(3)),
            ]
        );
    }

    #[test]
    fn first_order_matches_its_items_and_payment() {
        let data = Dataset::sample(reference_time());
        assert_eq!(data.orders[0].amount_total, dec!(1600.0));
        assert_eq!(data.item_total(1), dec!(1600.0));
        assert_eq!(data.payments[0].amount, data.orders[0].amount_total);
    }
}
