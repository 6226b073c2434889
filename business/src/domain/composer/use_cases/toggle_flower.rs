use async_trait::async_trait;

use crate::domain::composer::errors::ComposerError;
use crate::domain::composer::model::ComposerState;

pub struct ToggleFlowerParams {
    pub flower_id: u32,
}

#[async_trait]
pub trait ToggleFlowerUseCase: Send + Sync {
    async fn execute(&self, params: ToggleFlowerParams) -> Result<ComposerState, ComposerError>;
}
