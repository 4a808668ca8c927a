use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};

/// Persistence for products. Pass-through only: stock rules live in the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; storage assigns the id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Overwrite an existing product by id; `NotFound` if it is gone
    async fn save(&self, product: Product) -> ProductResult<Product>;

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// All products, ascending id
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Returns whether a row was removed; absent ids are not an error
    async fn delete_by_id(&self, id: i64) -> ProductResult<bool>;

    /// Products with `stock_quantity < low_stock_threshold`, ascending id
    async fn find_low_stock(&self) -> ProductResult<Vec<Product>>;
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i64, Product>,
    last_id: i64,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let product = Product {
            id: store.last_id,
            name: input.name,
            description: input.description,
            stock_quantity: input.stock_quantity,
            low_stock_threshold: input.low_stock_threshold,
        };
        store.products.insert(product.id, product.clone());

        Ok(product)
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        match store.products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(product)
            }
            None => Err(ProductError::NotFound(product.id)),
        }
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        Ok(self.store.read().await.products.get(&id).cloned())
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.store.read().await.products.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<bool> {
        Ok(self.store.write().await.products.remove(&id).is_some())
    }

    async fn find_low_stock(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store
            .products
            .values()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect())
    }
}
