use serde::{Deserialize, Serialize};

/// Top-level screens of the storefront.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveView {
    #[default]
    Home,
    Constructor,
    Catalog,
    Tracking,
}

impl std::fmt::Display for ActiveView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActiveView::Home => write!(f, "home"),
            ActiveView::Constructor => write!(f, "constructor"),
            ActiveView::Catalog => write!(f, "catalog"),
            ActiveView::Tracking => write!(f, "tracking"),
        }
    }
}

impl std::str::FromStr for ActiveView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(ActiveView::Home),
            "constructor" => Ok(ActiveView::Constructor),
            "catalog" => Ok(ActiveView::Catalog),
            "tracking" => Ok(ActiveView::Tracking),
            _ => Err(format!("Invalid view: {}", s)),
        }
    }
}

/// Which screen is rendered and whether the cart dialog is open. Switching
/// loses no state: every screen reads from the shared session stores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub active: ActiveView,
    pub cart_open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_start_on_home_with_cart_closed() {
        let state = ViewState::default();

        assert_eq!(state.active, ActiveView::Home);
        assert!(!state.cart_open);
    }

    #[test]
    fn should_round_trip_view_names() {
        for view in [
            ActiveView::Home,
            ActiveView::Constructor,
            ActiveView::Catalog,
            ActiveView::Tracking,
        ] {
            assert_eq!(ActiveView::from_str(&view.to_string()).unwrap(), view);
        }
    }
}
