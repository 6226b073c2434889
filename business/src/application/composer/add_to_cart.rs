use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::model::{Cart, CartLine, ItemRef};
use crate::domain::cart::repository::CartRepository;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::composer::errors::ComposerError;
use crate::domain::composer::model::COMPOSED_BOUQUET_NAME;
use crate::domain::composer::repository::ComposerRepository;
use crate::domain::composer::use_cases::add_to_cart::AddComposedBouquetUseCase;
use crate::domain::logger::Logger;
use crate::domain::view::repository::ViewRepository;

pub struct AddComposedBouquetUseCaseImpl {
    pub repository: Arc<dyn ComposerRepository>,
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub view_repository: Arc<dyn ViewRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddComposedBouquetUseCase for AddComposedBouquetUseCaseImpl {
    async fn execute(&self) -> Result<Cart, ComposerError> {
        let state = self.repository.get().await?;
        if state.is_empty() {
            return Err(ComposerError::SelectionEmpty);
        }

        let flowers = self.catalog_repository.flowers().await?;
        let price = state.composed_price(&flowers);

        // Each composed bouquet is its own line; a fresh id keeps it from
        // merging with earlier compositions.
        let line = CartLine::new(ItemRef::Custom(Uuid::new_v4()), COMPOSED_BOUQUET_NAME, price)?;

        let mut cart = self.cart_repository.get().await?;
        cart.add(line);
        self.cart_repository.put(&cart).await?;

        let mut view = self.view_repository.get().await?;
        view.cart_open = true;
        self.view_repository.put(&view).await?;

        self.logger
            .info(&format!("Composed bouquet added to cart for {} ₽", price));
        Ok(cart)
    }
}
