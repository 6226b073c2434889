use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, ItemRef};

pub struct UpdateQuantityParams {
    pub item: ItemRef,
    pub delta: i64,
}

#[async_trait]
pub trait UpdateQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateQuantityParams) -> Result<Cart, CartError>;
}
