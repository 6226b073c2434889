use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::advance_status::{
    AdvanceOrderStatusParams, AdvanceOrderStatusUseCase,
};

pub struct AdvanceOrderStatusUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AdvanceOrderStatusUseCase for AdvanceOrderStatusUseCaseImpl {
    async fn execute(
        &self,
        params: AdvanceOrderStatusParams,
    ) -> Result<Option<Order>, OrderError> {
        let Some(order) = self.repository.current().await? else {
            self.logger.debug(&format!(
                "Timer for {} fired with no open order",
                params.order_id
            ));
            return Ok(None);
        };

        // Timers are keyed by order id; one scheduled for a replaced order
        // must not touch its successor.
        if order.id != params.order_id {
            self.logger.debug(&format!(
                "Timer for {} ignored, open order is {}",
                params.order_id, order.id
            ));
            return Ok(None);
        }

        let Some(updated) = order.advance_timed(params.step, Utc::now()) else {
            return Ok(None);
        };

        self.repository.put(&updated).await?;

        self.logger
            .info(&format!("Order {} is now {}", updated.id, updated.status));
        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{Cart, CartLine, ItemRef};
    use crate::domain::catalog::model::CatalogRef;
    use crate::domain::errors::RepositoryError;
    use crate::domain::order::model::Customer;
    use crate::domain::order::value_objects::{OrderId, OrderStatus, TimelineStep};
    use mockall::mock;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn current(&self) -> Result<Option<Order>, RepositoryError>;
            async fn put(&self, order: &Order) -> Result<(), RepositoryError>;
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

    fn pending_order() -> Order {
        let mut cart = Cart::default();
        cart.add(
            CartLine::new(ItemRef::Catalog(CatalogRef::Flower(1)), "Роза красная", 150).unwrap(),
        );
        Order::place(&cart, Customer::new("Анна", "1", "2").unwrap()).unwrap()
    }

    #[tokio::test]
    async fn should_move_pending_order_to_assembling() {
        let order = pending_order();
        let order_id = order.id.clone();

        let mut repo = MockOrderRepo::new();
        repo.expect_current()
            .returning(move || Ok(Some(order.clone())));
        repo.expect_put()
            .withf(|o| o.status == OrderStatus::Assembling)
            .returning(|_| Ok(()));

        let use_case = AdvanceOrderStatusUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AdvanceOrderStatusParams {
                order_id,
                step: TimelineStep::Assembling,
            })
            .await;

        assert_eq!(result.unwrap().unwrap().status, OrderStatus::Assembling);
    }

    #[tokio::test]
    async fn should_stamp_ready_at_when_order_becomes_ready() {
        let order = pending_order();
        let order_id = order.id.clone();

        let mut repo = MockOrderRepo::new();
        repo.expect_current()
            .returning(move || Ok(Some(order.clone())));
        repo.expect_put()
            .withf(|o| o.status == OrderStatus::Ready && o.ready_at.is_some())
            .returning(|_| Ok(()));

        let use_case = AdvanceOrderStatusUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AdvanceOrderStatusParams {
                order_id,
                step: TimelineStep::Ready,
            })
            .await;

        let updated = result.unwrap().unwrap();
        assert_eq!(updated.status, OrderStatus::Ready);
        assert!(updated.ready_at.is_some());
    }

    #[tokio::test]
    async fn should_ignore_timer_for_replaced_order() {
        let open_order = pending_order();

        let mut repo = MockOrderRepo::new();
        repo.expect_current()
            .returning(move || Ok(Some(open_order.clone())));
        // No put expectation: writing would fail the test.

        let use_case = AdvanceOrderStatusUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AdvanceOrderStatusParams {
                order_id: OrderId::new(),
                step: TimelineStep::Assembling,
            })
            .await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_ignore_timer_when_no_order_is_open() {
        let mut repo = MockOrderRepo::new();
        repo.expect_current().returning(|| Ok(None));

        let use_case = AdvanceOrderStatusUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AdvanceOrderStatusParams {
                order_id: OrderId::new(),
                step: TimelineStep::Ready,
            })
            .await;

        assert!(result.unwrap().is_none());
    }
}
