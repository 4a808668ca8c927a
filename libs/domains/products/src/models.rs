use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Threshold applied when a product is created without one
pub const DEFAULT_LOW_STOCK_THRESHOLD: i32 = 10;

fn default_low_stock_threshold() -> i32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

/// A stocked item in the warehouse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned by storage on create, never changes
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Bolt")]
    pub name: String,
    pub description: Option<String>,
    /// Units on hand, never negative
    #[schema(example = 5, minimum = 0)]
    pub stock_quantity: i32,
    /// The product is low on stock while `stock_quantity` is below this
    #[schema(example = 10)]
    pub low_stock_threshold: i32,
}

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity < self.low_stock_threshold
    }

    /// Overwrite every editable field (PUT semantics); the id is kept
    pub fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.description = update.description;
        self.stock_quantity = update.stock_quantity;
        self.low_stock_threshold = update.low_stock_threshold;
    }
}

/// Body of `POST /products`. An `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[serde(default)]
    #[validate(length(max = 255))]
    #[schema(example = "Bolt")]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub description: Option<String>,

    #[serde(default)]
    #[schema(example = 5)]
    pub stock_quantity: i32,

    #[serde(default = "default_low_stock_threshold")]
    #[schema(example = 10)]
    pub low_stock_threshold: i32,
}

impl CreateProduct {
    pub fn new(name: impl Into<String>, stock_quantity: i32) -> Self {
        Self {
            name: name.into(),
            description: None,
            stock_quantity,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_low_stock_threshold(mut self, threshold: i32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }
}

/// Body of `PUT /products/{id}`; replaces all editable fields
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub description: Option<String>,

    #[serde(default)]
    pub stock_quantity: i32,

    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i32,
}

/// `?quantity=` of the stock adjustment endpoints
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StockAdjustment {
    /// Units to add or remove, must be positive
    pub quantity: i32,
}
