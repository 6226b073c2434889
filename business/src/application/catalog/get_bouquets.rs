use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Bouquet;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_bouquets::GetBouquetsUseCase;
use crate::domain::logger::Logger;

pub struct GetBouquetsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBouquetsUseCase for GetBouquetsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Bouquet>, CatalogError> {
        self.logger.debug("Listing showcase bouquets");

        let bouquets = self.repository.bouquets().await?;
        Ok(bouquets)
    }
}
