use async_trait::async_trait;

use crate::domain::catalog::model::Flower;

use super::errors::ComposerError;

/// Service port for producing a bouquet preview image from the selected
/// flowers and the customer's free-text wish. Implementations must be
/// deterministic for the same input.
#[async_trait]
pub trait BouquetPreviewService: Send + Sync {
    async fn generate(&self, flowers: &[Flower], prompt: &str) -> Result<String, ComposerError>;
}
