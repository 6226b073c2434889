use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;

pub struct CheckoutParams {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self, params: CheckoutParams) -> Result<Order, OrderError>;
}
