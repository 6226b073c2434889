use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::composer::errors::ComposerError;

#[async_trait]
pub trait AddComposedBouquetUseCase: Send + Sync {
    async fn execute(&self) -> Result<Cart, ComposerError>;
}
