use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// Sea-ORM entity for the `products` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub stock_quantity: i32,
    pub low_stock_threshold: i32,
}

impl Model {
    /// Mount point of the products router below `/api`
    pub const URL: &'static str = "/products";
    /// OpenAPI tag shared by every products endpoint
    pub const TAG: &'static str = "Products";
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            stock_quantity: model.stock_quantity,
            low_stock_threshold: model.low_stock_threshold,
        }
    }
}

// Insert: the id is left to the BIGSERIAL sequence
impl From<crate::models::CreateProduct> for ActiveModel {
    fn from(input: crate::models::CreateProduct) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            stock_quantity: Set(input.stock_quantity),
            low_stock_threshold: Set(input.low_stock_threshold),
        }
    }
}

// Update: every column is written, keyed by id
impl From<crate::models::Product> for ActiveModel {
    fn from(product: crate::models::Product) -> Self {
        ActiveModel {
            id: Set(product.id),
            name: Set(product.name),
            description: Set(product.description),
            stock_quantity: Set(product.stock_quantity),
            low_stock_threshold: Set(product.low_stock_threshold),
        }
    }
}
