//! Read helpers that walk the relationship graph from either side.

use sea_orm::{ConnectionTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryOrder};
use serde::Serialize;

use crate::entities::{
    category, customer, inventory, order, order_item, payment, product, product_category, review,
    shipment, supplier, supplier_product,
};
use crate::errors::ServiceError;
use crate::index::ChildIndex;
use crate::seed::TableCounts;

/// An order with its parent customer and every child collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrderDetails {
    pub order: order::Model,
    pub customer: customer::Model,
    pub items: Vec<order_item::Model>,
    pub payments: Vec<payment::Model>,
    pub shipments: Vec<shipment::Model>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CustomerDetails {
    pub customer: customer::Model,
    pub orders: Vec<order::Model>,
    pub reviews: Vec<review::Model>,
}

/// A product with its child rows and the categories and suppliers reached
/// through the association tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductDetails {
    pub product: product::Model,
    pub inventory: Vec<inventory::Model>,
    pub categories: Vec<category::Model>,
    pub suppliers: Vec<supplier::Model>,
    pub reviews: Vec<review::Model>,
    pub order_items: Vec<order_item::Model>,
}

/// Row counts of all twelve tables.
pub async fn table_counts<C>(db: &C) -> Result<TableCounts, ServiceError>
where
    C: ConnectionTrait,
{
    Ok(TableCounts {
        customers: customer::Entity::find().count(db).await?,
        products: product::Entity::find().count(db).await?,
        suppliers: supplier::Entity::find().count(db).await?,
        categories: category::Entity::find().count(db).await?,
        orders: order::Entity::find().count(db).await?,
        inventory: inventory::Entity::find().count(db).await?,
        supplier_products: supplier_product::Entity::find().count(db).await?,
        order_items: order_item::Entity::find().count(db).await?,
        shipments: shipment::Entity::find().count(db).await?,
        payments: payment::Entity::find().count(db).await?,
        reviews: review::Entity::find().count(db).await?,
        product_categories: product_category::Entity::find().count(db).await?,
    })
}

pub async fn order_details<C>(db: &C, order_id: i32) -> Result<OrderDetails, ServiceError>
where
    C: ConnectionTrait,
{
    let order = order::Entity::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("order {}", order_id)))?;

    let customer = order
        .find_related(customer::Entity)
        .one(db)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("customer {} of order {}", order.customer_id, order.id))
        })?;

    let items = order
        .find_related(order_item::Entity)
        .order_by_asc(order_item::Column::Id)
        .all(db)
        .await?;
    let payments = order
        .find_related(payment::Entity)
        .order_by_asc(payment::Column::Id)
        .all(db)
        .await?;
    let shipments = order
        .find_related(shipment::Entity)
        .order_by_asc(shipment::Column::Id)
        .all(db)
        .await?;

    Ok(OrderDetails {
        order,
        customer,
        items,
        payments,
        shipments,
    })
}

pub async fn customer_details<C>(db: &C, customer_id: i32) -> Result<CustomerDetails, ServiceError>
where
    C: ConnectionTrait,
{
    let customer = customer::Entity::find_by_id(customer_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("customer {}", customer_id)))?;

    let orders = customer
        .find_related(order::Entity)
        .order_by_asc(order::Column::Id)
        .all(db)
        .await?;
    let reviews = customer
        .find_related(review::Entity)
        .order_by_asc(review::Column::Id)
        .all(db)
        .await?;

    Ok(CustomerDetails {
        customer,
        orders,
        reviews,
    })
}

pub async fn product_details<C>(db: &C, product_id: i32) -> Result<ProductDetails, ServiceError>
where
    C: ConnectionTrait,
{
    let product = product::Entity::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("product {}", product_id)))?;

    let inventory = product
        .find_related(inventory::Entity)
        .order_by_asc(inventory::Column::Id)
        .all(db)
        .await?;
    let categories = product
        .find_related(category::Entity)
        .order_by_asc(category::Column::Id)
        .all(db)
        .await?;
    let suppliers = product
        .find_related(supplier::Entity)
        .order_by_asc(supplier::Column::Id)
        .all(db)
        .await?;
    let reviews = product
        .find_related(review::Entity)
        .order_by_asc(review::Column::Id)
        .all(db)
        .await?;
    let order_items = product
        .find_related(order_item::Entity)
        .order_by_asc(order_item::Column::Id)
        .all(db)
        .await?;

    Ok(ProductDetails {
        product,
        inventory,
        categories,
        suppliers,
        reviews,
        order_items,
    })
}

/// Products filed under `category_id`, through `product_categories`.
pub async fn products_in_category<C>(
    db: &C,
    category_id: i32,
) -> Result<Vec<product::Model>, ServiceError>
where
    C: ConnectionTrait,
{
    let category = category::Entity::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("category {}", category_id)))?;

    Ok(category
        .find_related(product::Entity)
        .order_by_asc(product::Column::Id)
        .all(db)
        .await?)
}

/// Products a supplier provides, through `supplier_products`.
pub async fn products_of_supplier<C>(
    db: &C,
    supplier_id: i32,
) -> Result<Vec<product::Model>, ServiceError>
where
    C: ConnectionTrait,
{
    let supplier = supplier::Entity::find_by_id(supplier_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("supplier {}", supplier_id)))?;

    Ok(supplier
        .find_related(product::Entity)
        .order_by_asc(product::Column::Id)
        .all(db)
        .await?)
}

/// Every order paired with its items, in two queries.
pub async fn orders_with_items<C>(
    db: &C,
) -> Result<Vec<(order::Model, Vec<order_item::Model>)>, ServiceError>
where
    C: ConnectionTrait,
{
    let orders = order::Entity::find()
        .order_by_asc(order::Column::Id)
        .all(db)
        .await?;
    let items = order_item::Entity::find()
        .order_by_asc(order_item::Column::Id)
        .all(db)
        .await?;

    let mut index = ChildIndex::build(items, |item| item.order_id);
    Ok(orders
        .into_iter()
        .map(|order| {
            let items = index.take(order.id);
            (order, items)
        })
        .collect())
}
