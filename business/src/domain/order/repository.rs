use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Order;

/// Single-slot store for the active order. A new checkout replaces the
/// previous order; there is no order history.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn current(&self) -> Result<Option<Order>, RepositoryError>;
    async fn put(&self, order: &Order) -> Result<(), RepositoryError>;
}
