use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::view::errors::ViewError;
use crate::domain::view::model::ViewState;
use crate::domain::view::repository::ViewRepository;
use crate::domain::view::use_cases::get_view::GetViewUseCase;

pub struct GetViewUseCaseImpl {
    pub repository: Arc<dyn ViewRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetViewUseCase for GetViewUseCaseImpl {
    async fn execute(&self) -> Result<ViewState, ViewError> {
        self.logger.debug("Reading view state");

        let state = self.repository.get().await?;
        Ok(state)
    }
}
