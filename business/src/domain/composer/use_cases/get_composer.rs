use async_trait::async_trait;

use crate::domain::composer::errors::ComposerError;
use crate::domain::composer::model::ComposerSummary;

#[async_trait]
pub trait GetComposerUseCase: Send + Sync {
    async fn execute(&self) -> Result<ComposerSummary, ComposerError>;
}
