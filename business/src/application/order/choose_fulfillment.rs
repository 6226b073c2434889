use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::choose_fulfillment::{
    ChooseFulfillmentParams, ChooseFulfillmentUseCase,
};

pub struct ChooseFulfillmentUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ChooseFulfillmentUseCase for ChooseFulfillmentUseCaseImpl {
    async fn execute(&self, params: ChooseFulfillmentParams) -> Result<Order, OrderError> {
        let order = self
            .repository
            .current()
            .await?
            .ok_or(OrderError::NotFound)?;

        let updated = order.fulfill(params.method)?;
        self.repository.put(&updated).await?;

        self.logger.info(&format!(
            "Order {} taken by {}: now {}",
            updated.id, params.method, updated.status
        ));
        Ok(updated)
    }
}
