use serde::{Deserialize, Serialize};

use crate::domain::catalog::model::Flower;

/// Assembly surcharge: every selected stem is charged at this multiple of
/// its catalog price.
pub const ASSEMBLY_MULTIPLIER: u32 = 5;

/// Display name given to a bouquet assembled in the constructor.
pub const COMPOSED_BOUQUET_NAME: &str = "Авторский букет";

/// Working state of the bouquet constructor: the flowers picked so far,
/// the free-text wish, and the last generated preview.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComposerState {
    pub selected: Vec<u32>,
    pub prompt: String,
    pub preview: Option<String>,
}

impl ComposerState {
    /// Toggles a flower in the selection. Returns whether the flower ends
    /// up selected.
    pub fn toggle(&mut self, flower_id: u32) -> bool {
        if let Some(pos) = self.selected.iter().position(|id| *id == flower_id) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(flower_id);
            true
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Price of the composed bouquet against the given catalog. Ids missing
    /// from the catalog contribute nothing.
    pub fn composed_price(&self, flowers: &[Flower]) -> u32 {
        self.selected
            .iter()
            .map(|id| {
                flowers
                    .iter()
                    .find(|flower| flower.id == *id)
                    .map_or(0, |flower| flower.price * ASSEMBLY_MULTIPLIER)
            })
            .sum()
    }
}

/// Read model pairing the constructor state with its current price.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposerSummary {
    pub state: ComposerState,
    pub price: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flower(id: u32, price: u32) -> Flower {
        Flower {
            id,
            name: format!("Flower {}", id),
            price,
            image: "img".to_string(),
            available: 10,
        }
    }

    #[test]
    fn should_select_then_deselect_on_repeated_toggle() {
        let mut state = ComposerState::default();

        assert!(state.toggle(1));
        assert_eq!(state.selected, vec![1]);

        assert!(!state.toggle(1));
        assert!(state.selected.is_empty());
    }

    #[test]
    fn should_price_each_selected_stem_at_five_times_catalog_price() {
        let mut state = ComposerState::default();
        state.toggle(1);
        state.toggle(3);

        let catalog = vec![flower(1, 150), flower(2, 100), flower(3, 120)];

        assert_eq!(state.composed_price(&catalog), (150 + 120) * 5);
    }

    #[test]
    fn should_price_unknown_ids_at_zero() {
        let mut state = ComposerState::default();
        state.toggle(42);

        assert_eq!(state.composed_price(&[flower(1, 150)]), 0);
    }
}
