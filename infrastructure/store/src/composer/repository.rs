use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::composer::model::ComposerState;
use business::domain::composer::repository::ComposerRepository;
use business::domain::errors::RepositoryError;

/// Constructor state of the session behind an `RwLock`.
pub struct ComposerRepositoryInMemory {
    state: RwLock<ComposerState>,
}

impl ComposerRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ComposerState::default()),
        }
    }
}

impl Default for ComposerRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ComposerRepository for ComposerRepositoryInMemory {
    async fn get(&self) -> Result<ComposerState, RepositoryError> {
        Ok(self.state.read().await.clone())
    }

    async fn put(&self, state: &ComposerState) -> Result<(), RepositoryError> {
        *self.state.write().await = state.clone();
        Ok(())
    }
}
