use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;

/// Single-slot order store: the storefront tracks one order at a time and
/// a new checkout replaces the previous one.
pub struct OrderRepositoryInMemory {
    order: RwLock<Option<Order>>,
}

impl OrderRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            order: RwLock::new(None),
        }
    }
}

impl Default for OrderRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryInMemory {
    async fn current(&self) -> Result<Option<Order>, RepositoryError> {
        Ok(self.order.read().await.clone())
    }

    async fn put(&self, order: &Order) -> Result<(), RepositoryError> {
        *self.order.write().await = Some(order.clone());
        Ok(())
    }
}
