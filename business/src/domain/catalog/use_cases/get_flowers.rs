use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Flower;

#[async_trait]
pub trait GetFlowersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Flower>, CatalogError>;
}
