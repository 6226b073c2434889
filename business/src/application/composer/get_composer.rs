use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::composer::errors::ComposerError;
use crate::domain::composer::model::ComposerSummary;
use crate::domain::composer::repository::ComposerRepository;
use crate::domain::composer::use_cases::get_composer::GetComposerUseCase;
use crate::domain::logger::Logger;

pub struct GetComposerUseCaseImpl {
    pub repository: Arc<dyn ComposerRepository>,
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetComposerUseCase for GetComposerUseCaseImpl {
    async fn execute(&self) -> Result<ComposerSummary, ComposerError> {
        self.logger.debug("Reading constructor state");

        let state = self.repository.get().await?;
        let flowers = self.catalog_repository.flowers().await?;
        let price = state.composed_price(&flowers);

        Ok(ComposerSummary { state, price })
    }
}
