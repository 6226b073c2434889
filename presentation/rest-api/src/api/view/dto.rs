use poem_openapi::Object;

use business::domain::view::model::ViewState;

#[derive(Debug, Clone, Object)]
pub struct NavigateRequest {
    /// Target screen: home, constructor, catalog or tracking
    pub view: String,
}

#[derive(Debug, Clone, Object)]
pub struct CartDialogRequest {
    /// Whether the cart dialog should be open
    pub open: bool,
}

#[derive(Debug, Clone, Object)]
pub struct ViewStateResponse {
    /// Currently rendered screen
    pub active: String,
    /// Whether the cart dialog is open
    pub cart_open: bool,
}

impl From<ViewState> for ViewStateResponse {
    fn from(state: ViewState) -> Self {
        Self {
            active: state.active.to_string(),
            cart_open: state.cart_open,
        }
    }
}
