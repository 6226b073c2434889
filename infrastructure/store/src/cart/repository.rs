use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

/// The session's cart behind an `RwLock`. Use cases read, mutate, and
/// write back whole carts; the lock keeps concurrent handlers consistent.
pub struct CartRepositoryInMemory {
    cart: RwLock<Cart>,
}

impl CartRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            cart: RwLock::new(Cart::default()),
        }
    }
}

impl Default for CartRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CartRepository for CartRepositoryInMemory {
    async fn get(&self) -> Result<Cart, RepositoryError> {
        Ok(self.cart.read().await.clone())
    }

    async fn put(&self, cart: &Cart) -> Result<(), RepositoryError> {
        *self.cart.write().await = cart.clone();
        Ok(())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        *self.cart.write().await = Cart::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::{CartLine, ItemRef};
    use business::domain::catalog::model::CatalogRef;

    #[tokio::test]
    async fn should_round_trip_cart_and_clear_it() {
        let repository = CartRepositoryInMemory::new();

        let mut cart = Cart::default();
        cart.add(
            CartLine::new(ItemRef::Catalog(CatalogRef::Flower(1)), "Роза красная", 150).unwrap(),
        );
        repository.put(&cart).await.unwrap();

        assert_eq!(repository.get().await.unwrap(), cart);

        repository.clear().await.unwrap();
        assert!(repository.get().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_hand_out_detached_copies() {
        let repository = CartRepositoryInMemory::new();

        let mut copy = repository.get().await.unwrap();
        copy.add(
            CartLine::new(ItemRef::Catalog(CatalogRef::Flower(1)), "Роза красная", 150).unwrap(),
        );

        // The stored cart is only changed by an explicit put.
        assert!(repository.get().await.unwrap().is_empty());
    }
}
