use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ComposerState;

/// Store for the constructor state of the active session.
#[async_trait]
pub trait ComposerRepository: Send + Sync {
    async fn get(&self) -> Result<ComposerState, RepositoryError>;
    async fn put(&self, state: &ComposerState) -> Result<(), RepositoryError>;
}
