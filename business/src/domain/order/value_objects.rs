use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique order token, rendered as `ORD-<uuid>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ORD-{}", self.0)
    }
}

impl std::str::FromStr for OrderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .strip_prefix("ORD-")
            .ok_or_else(|| format!("Invalid order id: {}", s))?;
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| format!("Invalid order id: {}", s))
    }
}

/// Lifecycle of an order: `pending → assembling → ready`, then either
/// `delivering` or `completed`. The last two are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Assembling,
    Ready,
    Delivering,
    Completed,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivering | OrderStatus::Completed)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Assembling => write!(f, "assembling"),
            OrderStatus::Ready => write!(f, "ready"),
            OrderStatus::Delivering => write!(f, "delivering"),
            OrderStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "assembling" => Ok(OrderStatus::Assembling),
            "ready" => Ok(OrderStatus::Ready),
            "delivering" => Ok(OrderStatus::Delivering),
            "completed" => Ok(OrderStatus::Completed),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

/// The two timer-driven steps of the preparation timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineStep {
    Assembling,
    Ready,
}

/// How the customer takes a ready order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentMethod {
    Pickup,
    Delivery,
}

impl std::fmt::Display for FulfillmentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FulfillmentMethod::Pickup => write!(f, "pickup"),
            FulfillmentMethod::Delivery => write!(f, "delivery"),
        }
    }
}

impl std::str::FromStr for FulfillmentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pickup" => Ok(FulfillmentMethod::Pickup),
            "delivery" => Ok(FulfillmentMethod::Delivery),
            _ => Err(format!("Invalid fulfillment method: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_render_and_parse_order_id() {
        let id = OrderId::new();
        let rendered = id.to_string();

        assert!(rendered.starts_with("ORD-"));
        assert_eq!(OrderId::from_str(&rendered).unwrap(), id);
    }

    #[test]
    fn should_reject_order_id_without_prefix() {
        assert!(OrderId::from_str("20e9b2da-3dd2-44fd-ab1b-8035bfe9ef49").is_err());
    }

    #[test]
    fn should_round_trip_order_status() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Assembling,
            OrderStatus::Ready,
            OrderStatus::Delivering,
            OrderStatus::Completed,
        ] {
            assert_eq!(OrderStatus::from_str(&status.to_string()).unwrap(), status);
        }
    }

    #[test]
    fn should_mark_only_final_states_terminal() {
        assert!(OrderStatus::Delivering.is_terminal());
        assert!(OrderStatus::Completed.is_terminal());
        assert!(!OrderStatus::Ready.is_terminal());
    }
}
