//! sea-orm entities, one per table.
//!
//! Parents: `category`, `customer`, `product`, `supplier`.
//! Children hold the foreign keys; `product_category` and `supplier_product`
//! are the association tables behind the many-to-many links.

pub mod category;
pub mod customer;
pub mod inventory;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod product;
pub mod product_category;
pub mod review;
pub mod shipment;
pub mod supplier;
pub mod supplier_product;

pub mod prelude {
    pub use super::category::Entity as Category;
    pub use super::customer::Entity as Customer;
    pub use super::inventory::Entity as Inventory;
    pub use super::order::Entity as Order;
    pub use super::order_item::Entity as OrderItem;
    pub use super::payment::Entity as Payment;
    pub use super::product::Entity as Product;
    pub use super::product_category::Entity as ProductCategory;
    pub use super::review::Entity as Review;
    pub use super::shipment::Entity as Shipment;
    pub use super::supplier::Entity as Supplier;
    pub use super::supplier_product::Entity as SupplierProduct;
}
