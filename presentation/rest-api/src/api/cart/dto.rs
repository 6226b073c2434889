use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLine};

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Catalog reference, e.g. "flower:1" or "bouquet:2"
    pub reference: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    /// Signed quantity change; reaching zero removes the line
    pub delta: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    /// Line reference, e.g. "flower:1" or "custom:<uuid>"
    pub item: String,
    /// Display name
    pub name: String,
    /// Price per unit in rubles
    pub unit_price: u32,
    /// Units queued
    pub quantity: u32,
    /// unit_price × quantity
    pub line_total: u64,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            item: line.item.to_string(),
            name: line.name.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
    /// Sum over all lines in rubles
    pub total: u64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            total: cart.total(),
            items: cart.lines().iter().map(|line| line.into()).collect(),
        }
    }
}
