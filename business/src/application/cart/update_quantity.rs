use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{UpdateQuantityParams, UpdateQuantityUseCase};
use crate::domain::logger::Logger;

pub struct UpdateQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateQuantityUseCase for UpdateQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Changing quantity of {} by {}",
            params.item, params.delta
        ));

        let mut cart = self.repository.get().await?;
        cart.update_quantity(&params.item, params.delta);
        self.repository.put(&cart).await?;

        Ok(cart)
    }
}
