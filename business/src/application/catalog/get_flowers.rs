use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Flower;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_flowers::GetFlowersUseCase;
use crate::domain::logger::Logger;

pub struct GetFlowersUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFlowersUseCase for GetFlowersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Flower>, CatalogError> {
        self.logger.debug("Listing catalog flowers");

        let flowers = self.repository.flowers().await?;
        Ok(flowers)
    }
}
