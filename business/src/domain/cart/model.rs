use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::catalog::model::CatalogRef;

use super::errors::CartError;

/// Identity of a purchasable line. Catalog items merge by reference on
/// repeated additions; composed bouquets are one-off lines carrying their
/// own generated id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemRef {
    Catalog(CatalogRef),
    Custom(Uuid),
}

impl std::fmt::Display for ItemRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemRef::Catalog(reference) => write!(f, "{}", reference),
            ItemRef::Custom(id) => write!(f, "custom:{}", id),
        }
    }
}

impl std::str::FromStr for ItemRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(raw) = s.strip_prefix("custom:") {
            let id = Uuid::parse_str(raw).map_err(|_| format!("Invalid item reference: {}", s))?;
            return Ok(ItemRef::Custom(id));
        }
        s.parse::<CatalogRef>().map(ItemRef::Catalog)
    }
}

/// One distinct purchasable thing and how many of it are queued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: ItemRef,
    pub name: String,
    pub unit_price: u32,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item: ItemRef, name: impl Into<String>, unit_price: u32) -> Result<Self, CartError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CartError::NameEmpty);
        }
        if unit_price == 0 {
            return Err(CartError::PriceZero);
        }
        Ok(Self {
            item,
            name,
            unit_price,
            quantity: 1,
        })
    }

    pub fn line_total(&self) -> u64 {
        u64::from(self.unit_price) * u64::from(self.quantity)
    }
}

/// The shopping cart aggregate. Invariant: no line ever holds a quantity
/// below one; an update reaching zero drops the line instead of keeping a
/// zero-quantity row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn find(&self, item: &ItemRef) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item == *item)
    }

    /// A line with the same item reference gains one unit; anything else is
    /// appended as given.
    pub fn add(&mut self, line: CartLine) {
        match self.lines.iter_mut().find(|l| l.item == line.item) {
            Some(existing) => existing.quantity += 1,
            None => self.lines.push(line),
        }
    }

    /// Removes the line if present. An absent reference is not an error.
    pub fn remove(&mut self, item: &ItemRef) {
        self.lines.retain(|line| line.item != *item);
    }

    /// Applies a signed quantity delta. The line survives only while the
    /// resulting quantity stays above zero. Absent references are ignored.
    pub fn update_quantity(&mut self, item: &ItemRef, delta: i64) {
        if let Some(pos) = self.lines.iter().position(|line| line.item == *item) {
            let new_quantity = i64::from(self.lines[pos].quantity) + delta;
            if new_quantity > 0 {
                self.lines[pos].quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
            } else {
                self.lines.remove(pos);
            }
        }
    }

    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}
