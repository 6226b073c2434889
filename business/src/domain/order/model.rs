use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::cart::model::{Cart, CartLine};

use super::errors::OrderError;
use super::value_objects::{FulfillmentMethod, OrderId, OrderStatus, TimelineStep};

/// Contact and delivery details captured at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, OrderError> {
        let name = name.into();
        let phone = phone.into();
        let address = address.into();

        if name.trim().is_empty() {
            return Err(OrderError::CustomerNameEmpty);
        }
        if phone.trim().is_empty() {
            return Err(OrderError::CustomerPhoneEmpty);
        }
        if address.trim().is_empty() {
            return Err(OrderError::CustomerAddressEmpty);
        }

        Ok(Self {
            name,
            phone,
            address,
        })
    }
}

/// A placed order: a snapshot of the cart plus a status advancing through
/// the fixed lifecycle. `items` and `total` are frozen at creation and
/// never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub items: Vec<CartLine>,
    pub total: u64,
    pub customer: Customer,
    pub created_at: DateTime<Utc>,
    pub ready_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Builds a `pending` order from the cart. The order keeps its own copy
    /// of the lines; clearing the cart afterwards is the caller's business.
    pub fn place(cart: &Cart, customer: Customer) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::CartEmpty);
        }

        Ok(Self {
            id: OrderId::new(),
            status: OrderStatus::Pending,
            items: cart.lines().to_vec(),
            total: cart.total(),
            customer,
            created_at: Utc::now(),
            ready_at: None,
        })
    }

    /// Applies a timer-driven step. Returns `None` when the step no longer
    /// applies to the current status, so a late or duplicate timer cannot
    /// rewind the lifecycle.
    pub fn advance_timed(&self, step: TimelineStep, now: DateTime<Utc>) -> Option<Self> {
        match (step, self.status) {
            (TimelineStep::Assembling, OrderStatus::Pending) => Some(Self {
                status: OrderStatus::Assembling,
                ..self.clone()
            }),
            (TimelineStep::Ready, OrderStatus::Pending | OrderStatus::Assembling) => Some(Self {
                status: OrderStatus::Ready,
                ready_at: Some(now),
                ..self.clone()
            }),
            _ => None,
        }
    }

    /// The customer's choice once the bouquet is ready: pickup completes
    /// the order, delivery hands it to the courier. Only legal from
    /// `ready`.
    pub fn fulfill(&self, method: FulfillmentMethod) -> Result<Self, OrderError> {
        if self.status != OrderStatus::Ready {
            return Err(OrderError::IllegalTransition);
        }

        let status = match method {
            FulfillmentMethod::Pickup => OrderStatus::Completed,
            FulfillmentMethod::Delivery => OrderStatus::Delivering,
        };

        Ok(Self {
            status,
            ..self.clone()
        })
    }
}
