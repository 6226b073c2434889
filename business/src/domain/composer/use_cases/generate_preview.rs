use async_trait::async_trait;

use crate::domain::composer::errors::ComposerError;
use crate::domain::composer::model::ComposerState;

pub struct GeneratePreviewParams {
    pub prompt: String,
}

#[async_trait]
pub trait GeneratePreviewUseCase: Send + Sync {
    async fn execute(&self, params: GeneratePreviewParams)
    -> Result<ComposerState, ComposerError>;
}
