use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use business::domain::logger::Logger;
use business::domain::order::timeline::OrderTimeline;
use business::domain::order::use_cases::advance_status::{
    AdvanceOrderStatusParams, AdvanceOrderStatusUseCase,
};
use business::domain::order::value_objects::{OrderId, TimelineStep};

/// Delays of the preparation timeline, both measured from checkout.
#[derive(Debug, Clone, Copy)]
pub struct TimelineDelays {
    pub assembling: Duration,
    pub ready: Duration,
}

impl Default for TimelineDelays {
    fn default() -> Self {
        Self {
            assembling: Duration::from_millis(2000),
            ready: Duration::from_millis(17000),
        }
    }
}

/// Tokio-backed implementation of the order timeline port.
///
/// One task per order walks the two delayed steps and hands each to the
/// advance use case, which id-matches before touching anything. Tasks are
/// kept by order id so a replaced order's timeline can be aborted.
pub struct TokioOrderTimeline {
    advance: Arc<dyn AdvanceOrderStatusUseCase>,
    delays: TimelineDelays,
    logger: Arc<dyn Logger>,
    tasks: Mutex<HashMap<OrderId, JoinHandle<()>>>,
}

impl TokioOrderTimeline {
    pub fn new(
        advance: Arc<dyn AdvanceOrderStatusUseCase>,
        delays: TimelineDelays,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            advance,
            delays,
            logger,
            tasks: Mutex::new(HashMap::new()),
        }
    }

    fn lock_tasks(&self) -> std::sync::MutexGuard<'_, HashMap<OrderId, JoinHandle<()>>> {
        self.tasks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl OrderTimeline for TokioOrderTimeline {
    fn schedule(&self, order_id: OrderId) {
        let advance = Arc::clone(&self.advance);
        let logger = Arc::clone(&self.logger);
        let delays = self.delays;
        let id = order_id.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delays.assembling).await;
            if let Err(err) = advance
                .execute(AdvanceOrderStatusParams {
                    order_id: id.clone(),
                    step: TimelineStep::Assembling,
                })
                .await
            {
                logger.error(&format!("Timeline step failed for {}: {}", id, err));
            }

            // The second delay counts from checkout, not from the first step.
            tokio::time::sleep(delays.ready.saturating_sub(delays.assembling)).await;
            if let Err(err) = advance
                .execute(AdvanceOrderStatusParams {
                    order_id: id.clone(),
                    step: TimelineStep::Ready,
                })
                .await
            {
                logger.error(&format!("Timeline step failed for {}: {}", id, err));
            }
        });

        self.logger
            .debug(&format!("Timeline scheduled for {}", order_id));
        if let Some(previous) = self.lock_tasks().insert(order_id, handle) {
            previous.abort();
        }
    }

    fn cancel(&self, order_id: &OrderId) {
        if let Some(handle) = self.lock_tasks().remove(order_id) {
            handle.abort();
            self.logger
                .debug(&format!("Timeline cancelled for {}", order_id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::application::order::advance_status::AdvanceOrderStatusUseCaseImpl;
    use business::domain::cart::model::{Cart, CartLine, ItemRef};
    use business::domain::catalog::model::CatalogRef;
    use business::domain::errors::RepositoryError;
    use business::domain::order::model::{Customer, Order};
    use business::domain::order::repository::OrderRepository;
    use business::domain::order::value_objects::OrderStatus;
    use tokio::sync::RwLock;

    struct OrderSlot(RwLock<Option<Order>>);

    #[async_trait]
    impl OrderRepository for OrderSlot {
        async fn current(&self) -> Result<Option<Order>, RepositoryError> {
            Ok(self.0.read().await.clone())
        }

        async fn put(&self, order: &Order) -> Result<(), RepositoryError> {
            *self.0.write().await = Some(order.clone());
            Ok(())
        }
    }

    struct NullLogger;

    impl Logger for NullLogger {
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
        fn debug(&self, _message: &str) {}
    }

    fn pending_order() -> Order {
        let mut cart = Cart::default();
        cart.add(
            CartLine::new(ItemRef::Catalog(CatalogRef::Flower(1)), "Роза красная", 150).unwrap(),
        );
        Order::place(&cart, Customer::new("Анна", "1", "2").unwrap()).unwrap()
    }

    fn timeline_over(repository: Arc<OrderSlot>) -> TokioOrderTimeline {
        let advance = Arc::new(AdvanceOrderStatusUseCaseImpl {
            repository,
            logger: Arc::new(NullLogger),
        });
        TokioOrderTimeline::new(advance, TimelineDelays::default(), Arc::new(NullLogger))
    }

    #[tokio::test(start_paused = true)]
    async fn should_walk_order_through_assembling_and_ready() {
        let order = pending_order();
        let repository = Arc::new(OrderSlot(RwLock::new(Some(order.clone()))));
        let timeline = timeline_over(Arc::clone(&repository));

        timeline.schedule(order.id.clone());

        tokio::time::sleep(Duration::from_millis(2100)).await;
        let current = repository.current().await.unwrap().unwrap();
        assert_eq!(current.status, OrderStatus::Assembling);
        assert!(current.ready_at.is_none());

        tokio::time::sleep(Duration::from_millis(15000)).await;
        let current = repository.current().await.unwrap().unwrap();
        assert_eq!(current.status, OrderStatus::Ready);
        assert!(current.ready_at.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_fire_after_cancellation() {
        let order = pending_order();
        let repository = Arc::new(OrderSlot(RwLock::new(Some(order.clone()))));
        let timeline = timeline_over(Arc::clone(&repository));

        timeline.schedule(order.id.clone());
        timeline.cancel(&order.id);

        tokio::time::sleep(Duration::from_millis(20000)).await;
        let current = repository.current().await.unwrap().unwrap();
        assert_eq!(current.status, OrderStatus::Pending);
    }

    #[tokio::test(start_paused = true)]
    async fn should_leave_a_different_open_order_alone() {
        let replaced = pending_order();
        let open = pending_order();
        let repository = Arc::new(OrderSlot(RwLock::new(Some(open.clone()))));
        let timeline = timeline_over(Arc::clone(&repository));

        // Timers of an order that is no longer the open one.
        timeline.schedule(replaced.id.clone());

        tokio::time::sleep(Duration::from_millis(20000)).await;
        let current = repository.current().await.unwrap().unwrap();
        assert_eq!(current.id, open.id);
        assert_eq!(current.status, OrderStatus::Pending);
    }
}
