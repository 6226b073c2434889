use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::composer::errors::ComposerError;
use crate::domain::composer::model::ComposerState;
use crate::domain::composer::repository::ComposerRepository;
use crate::domain::composer::use_cases::toggle_flower::{ToggleFlowerParams, ToggleFlowerUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct ToggleFlowerUseCaseImpl {
    pub repository: Arc<dyn ComposerRepository>,
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleFlowerUseCase for ToggleFlowerUseCaseImpl {
    async fn execute(&self, params: ToggleFlowerParams) -> Result<ComposerState, ComposerError> {
        self.catalog_repository
            .flower_by_id(params.flower_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ComposerError::UnknownFlower,
                other => ComposerError::Repository(other),
            })?;

        let mut state = self.repository.get().await?;
        let selected = state.toggle(params.flower_id);
        self.repository.put(&state).await?;

        self.logger.info(&format!(
            "Flower {} {}",
            params.flower_id,
            if selected { "selected" } else { "deselected" }
        ));
        Ok(state)
    }
}
