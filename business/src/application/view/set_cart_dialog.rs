use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::view::errors::ViewError;
use crate::domain::view::model::ViewState;
use crate::domain::view::repository::ViewRepository;
use crate::domain::view::use_cases::set_cart_dialog::{SetCartDialogParams, SetCartDialogUseCase};

pub struct SetCartDialogUseCaseImpl {
    pub repository: Arc<dyn ViewRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetCartDialogUseCase for SetCartDialogUseCaseImpl {
    async fn execute(&self, params: SetCartDialogParams) -> Result<ViewState, ViewError> {
        let mut state = self.repository.get().await?;
        state.cart_open = params.open;
        self.repository.put(&state).await?;

        self.logger.debug(if state.cart_open {
            "Cart dialog opened"
        } else {
            "Cart dialog closed"
        });
        Ok(state)
    }
}
