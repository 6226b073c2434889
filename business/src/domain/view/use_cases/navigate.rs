use async_trait::async_trait;

use crate::domain::view::errors::ViewError;
use crate::domain::view::model::{ActiveView, ViewState};

pub struct NavigateParams {
    pub view: ActiveView,
}

#[async_trait]
pub trait NavigateUseCase: Send + Sync {
    async fn execute(&self, params: NavigateParams) -> Result<ViewState, ViewError>;
}
