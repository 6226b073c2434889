use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::FulfillmentMethod;

pub struct ChooseFulfillmentParams {
    pub method: FulfillmentMethod,
}

#[async_trait]
pub trait ChooseFulfillmentUseCase: Send + Sync {
    async fn execute(&self, params: ChooseFulfillmentParams) -> Result<Order, OrderError>;
}
