use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::order::model::Order;

use crate::api::cart::dto::CartLineResponse;

#[derive(Debug, Clone, Object)]
pub struct CheckoutRequest {
    /// Customer name (cannot be empty)
    pub name: String,
    /// Contact phone (cannot be empty)
    pub phone: String,
    /// Delivery address (cannot be empty)
    pub address: String,
}

#[derive(Debug, Clone, Object)]
pub struct FulfillmentRequest {
    /// "pickup" or "delivery"
    pub method: String,
}

#[derive(Debug, Clone, Object)]
pub struct OrderCustomerResponse {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    /// Order token, e.g. "ORD-<uuid>"
    pub id: String,
    /// Lifecycle status: pending, assembling, ready, delivering, completed
    pub status: String,
    /// Snapshot of the cart at checkout
    pub items: Vec<CartLineResponse>,
    /// Total frozen at checkout, in rubles
    pub total: u64,
    pub customer: OrderCustomerResponse,
    /// Checkout timestamp
    pub created_at: DateTime<Utc>,
    /// Set when the bouquet becomes ready
    #[oai(skip_serializing_if_is_none)]
    pub ready_at: Option<DateTime<Utc>>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            status: order.status.to_string(),
            items: order.items.iter().map(|line| line.into()).collect(),
            total: order.total,
            customer: OrderCustomerResponse {
                name: order.customer.name,
                phone: order.customer.phone,
                address: order.customer.address,
            },
            created_at: order.created_at,
            ready_at: order.ready_at,
        }
    }
}
