use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// Stock rules for products: no negative stock, positive adjustments only,
/// and no removal beyond what is on hand.
///
/// Adjustments are read-modify-write without locking. Two concurrent
/// adjustments of the same product can lose one update; the stored quantity
/// still never goes negative because every write is validated first.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        ensure_non_negative_stock(input.stock_quantity)?;

        let product = self.repository.create(input).await?;
        info!(product_id = product.id, stock = product.stock_quantity, "Product created");
        Ok(product)
    }

    /// Persist a full product record
    #[instrument(skip(self, product), fields(product_id = product.id))]
    pub async fn save(&self, product: Product) -> ProductResult<Product> {
        ensure_non_negative_stock(product.stock_quantity)?;
        self.repository.save(product).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        self.repository.find_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Absent ids are silently ignored
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> ProductResult<()> {
        if self.repository.delete_by_id(id).await? {
            info!(product_id = id, "Product deleted");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn increase_stock(&self, id: i64, quantity: i32) -> ProductResult<Product> {
        if quantity <= 0 {
            return Err(ProductError::Validation(
                "Quantity to add must be positive.".to_string(),
            ));
        }

        let mut product = self.require(id).await?;
        let previous = product.stock_quantity;
        product.stock_quantity = previous.checked_add(quantity).ok_or_else(|| {
            ProductError::Validation(format!(
                "Adding {quantity} to stock of product {id} exceeds the maximum quantity"
            ))
        })?;

        let product = self.repository.save(product).await?;
        info!(
            product_id = id,
            from = previous,
            to = product.stock_quantity,
            "Stock increased"
        );
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn decrease_stock(&self, id: i64, quantity: i32) -> ProductResult<Product> {
        if quantity <= 0 {
            return Err(ProductError::Validation(
                "Quantity to remove must be positive.".to_string(),
            ));
        }

        let mut product = self.require(id).await?;
        let previous = product.stock_quantity;
        if previous < quantity {
            warn!(
                product_id = id,
                available = previous,
                requested = quantity,
                "Insufficient stock"
            );
            return Err(ProductError::InsufficientStock {
                id,
                available: previous,
                requested: quantity,
            });
        }
        product.stock_quantity = previous - quantity;

        let product = self.repository.save(product).await?;
        info!(
            product_id = id,
            from = previous,
            to = product.stock_quantity,
            "Stock decreased"
        );
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn get_low_stock_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_low_stock().await
    }

    async fn require(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}

fn ensure_non_negative_stock(stock_quantity: i32) -> ProductResult<()> {
    if stock_quantity < 0 {
        return Err(ProductError::Validation(
            "Stock quantity cannot be negative.".to_string(),
        ));
    }
    Ok(())
}
