use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Bouquet;

#[async_trait]
pub trait GetBouquetsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Bouquet>, CatalogError>;
}
