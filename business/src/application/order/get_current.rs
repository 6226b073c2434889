use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_current::GetCurrentOrderUseCase;

pub struct GetCurrentOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCurrentOrderUseCase for GetCurrentOrderUseCaseImpl {
    async fn execute(&self) -> Result<Order, OrderError> {
        self.logger.debug("Reading open order");

        self.repository
            .current()
            .await?
            .ok_or(OrderError::NotFound)
    }
}
