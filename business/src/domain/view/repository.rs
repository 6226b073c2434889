use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ViewState;

/// Store for the session's view state.
#[async_trait]
pub trait ViewRepository: Send + Sync {
    async fn get(&self) -> Result<ViewState, RepositoryError>;
    async fn put(&self, state: &ViewState) -> Result<(), RepositoryError>;
}
