use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::view::errors::ViewError;
use crate::domain::view::model::ViewState;
use crate::domain::view::repository::ViewRepository;
use crate::domain::view::use_cases::navigate::{NavigateParams, NavigateUseCase};

pub struct NavigateUseCaseImpl {
    pub repository: Arc<dyn ViewRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl NavigateUseCase for NavigateUseCaseImpl {
    async fn execute(&self, params: NavigateParams) -> Result<ViewState, ViewError> {
        let mut state = self.repository.get().await?;
        state.active = params.view;
        self.repository.put(&state).await?;

        self.logger
            .debug(&format!("Switched to the {} view", state.active));
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::view::model::ActiveView;
    use mockall::mock;

    mock! {
        pub ViewRepo {}

        #[async_trait]
        impl ViewRepository for ViewRepo {
            async fn get(&self) -> Result<ViewState, RepositoryError>;
            async fn put(&self, state: &ViewState) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_switch_view_without_touching_cart_dialog() {
        let mut repo = MockViewRepo::new();
        repo.expect_get().returning(|| Ok(ViewState {
            active: ActiveView::Home,
            cart_open: true,
        }));
        repo.expect_put()
            .withf(|state| state.active == ActiveView::Tracking && state.cart_open)
            .returning(|_| Ok(()));

        let use_case = NavigateUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(NavigateParams {
                view: ActiveView::Tracking,
            })
            .await;

        assert_eq!(result.unwrap().active, ActiveView::Tracking);
    }
}
