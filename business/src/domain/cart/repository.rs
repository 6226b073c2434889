use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Store for the one cart of the active session.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get(&self) -> Result<Cart, RepositoryError>;
    async fn put(&self, cart: &Cart) -> Result<(), RepositoryError>;
    async fn clear(&self) -> Result<(), RepositoryError>;
}
