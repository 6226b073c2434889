use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::{OrderId, TimelineStep};

pub struct AdvanceOrderStatusParams {
    pub order_id: OrderId,
    pub step: TimelineStep,
}

/// Timer-driven advance. Returns `Ok(None)` when the timer is stale: the
/// order it was scheduled for is gone, was replaced, or already moved past
/// the step.
#[async_trait]
pub trait AdvanceOrderStatusUseCase: Send + Sync {
    async fn execute(&self, params: AdvanceOrderStatusParams)
    -> Result<Option<Order>, OrderError>;
}
