use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Suppliers providing products to be sold.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub contact_info: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::supplier_product::Entity")]
    SupplierProducts,
}

impl Related<super::supplier_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierProducts.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        super::supplier_product::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::supplier_product::Relation::Supplier.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
