use async_trait::async_trait;

use crate::domain::view::errors::ViewError;
use crate::domain::view::model::ViewState;

pub struct SetCartDialogParams {
    pub open: bool,
}

#[async_trait]
pub trait SetCartDialogUseCase: Send + Sync {
    async fn execute(&self, params: SetCartDialogParams) -> Result<ViewState, ViewError>;
}
