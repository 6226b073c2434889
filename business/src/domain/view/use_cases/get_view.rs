use async_trait::async_trait;

use crate::domain::view::errors::ViewError;
use crate::domain::view::model::ViewState;

#[async_trait]
pub trait GetViewUseCase: Send + Sync {
    async fn execute(&self) -> Result<ViewState, ViewError>;
}
