use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::view::model::ViewState;
use business::domain::view::repository::ViewRepository;

/// View state of the session; starts on the home screen with the cart
/// dialog closed.
pub struct ViewRepositoryInMemory {
    state: RwLock<ViewState>,
}

impl ViewRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ViewState::default()),
        }
    }
}

impl Default for ViewRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ViewRepository for ViewRepositoryInMemory {
    async fn get(&self) -> Result<ViewState, RepositoryError> {
        Ok(*self.state.read().await)
    }

    async fn put(&self, state: &ViewState) -> Result<(), RepositoryError> {
        *self.state.write().await = *state;
        Ok(())
    }
}
