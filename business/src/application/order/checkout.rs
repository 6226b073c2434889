use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Customer, Order};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::timeline::OrderTimeline;
use crate::domain::order::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use crate::domain::view::model::ActiveView;
use crate::domain::view::repository::ViewRepository;

pub struct CheckoutUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub view_repository: Arc<dyn ViewRepository>,
    pub timeline: Arc<dyn OrderTimeline>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, params: CheckoutParams) -> Result<Order, OrderError> {
        self.logger.info("Checking out cart");

        // Guards run before any state change: a failed checkout leaves the
        // cart and any open order untouched.
        let customer = Customer::new(params.name, params.phone, params.address)?;
        let cart = self.cart_repository.get().await?;
        let order = Order::place(&cart, customer)?;

        if let Some(previous) = self.repository.current().await? {
            self.timeline.cancel(&previous.id);
            self.logger
                .warn(&format!("Replacing open order {}", previous.id));
        }

        self.repository.put(&order).await?;
        self.cart_repository.clear().await?;

        let mut view = self.view_repository.get().await?;
        view.cart_open = false;
        view.active = ActiveView::Tracking;
        self.view_repository.put(&view).await?;

        self.timeline.schedule(order.id.clone());

        self.logger.info(&format!(
            "Order {} placed for {} ₽",
            order.id, order.total
        ));
        Ok(order)
    }
}
