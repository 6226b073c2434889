use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::composer::errors::ComposerError;
use crate::domain::composer::model::ComposerState;
use crate::domain::composer::repository::ComposerRepository;
use crate::domain::composer::services::BouquetPreviewService;
use crate::domain::composer::use_cases::generate_preview::{
    GeneratePreviewParams, GeneratePreviewUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GeneratePreviewUseCaseImpl {
    pub repository: Arc<dyn ComposerRepository>,
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub preview_service: Arc<dyn BouquetPreviewService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GeneratePreviewUseCase for GeneratePreviewUseCaseImpl {
    async fn execute(
        &self,
        params: GeneratePreviewParams,
    ) -> Result<ComposerState, ComposerError> {
        let mut state = self.repository.get().await?;
        state.prompt = params.prompt;

        if state.is_empty() {
            return Err(ComposerError::SelectionEmpty);
        }

        let mut flowers = Vec::with_capacity(state.selected.len());
        for id in &state.selected {
            let flower = self
                .catalog_repository
                .flower_by_id(*id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => ComposerError::UnknownFlower,
                    other => ComposerError::Repository(other),
                })?;
            flowers.push(flower);
        }

        self.logger.info(&format!(
            "Generating preview for {} selected flowers",
            flowers.len()
        ));

        let image = self.preview_service.generate(&flowers, &state.prompt).await?;
        state.preview = Some(image);
        self.repository.put(&state).await?;

        Ok(state)
    }
}
