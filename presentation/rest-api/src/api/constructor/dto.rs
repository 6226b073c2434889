use poem_openapi::Object;

use business::domain::composer::model::{ComposerState, ComposerSummary};

#[derive(Debug, Clone, Object)]
pub struct GeneratePreviewRequest {
    /// Free-text wish for the bouquet, e.g. "романтичный букет для свидания"
    #[oai(skip_serializing_if_is_none)]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ConstructorStateResponse {
    /// Ids of the selected flowers, in selection order
    pub selected_flowers: Vec<u32>,
    /// Free-text wish last submitted for generation
    pub prompt: String,
    /// Last generated preview image, if any
    #[oai(skip_serializing_if_is_none)]
    pub preview_image: Option<String>,
}

impl From<ComposerState> for ConstructorStateResponse {
    fn from(state: ComposerState) -> Self {
        Self {
            selected_flowers: state.selected,
            prompt: state.prompt,
            preview_image: state.preview,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ConstructorResponse {
    /// Ids of the selected flowers, in selection order
    pub selected_flowers: Vec<u32>,
    /// Free-text wish last submitted for generation
    pub prompt: String,
    /// Last generated preview image, if any
    #[oai(skip_serializing_if_is_none)]
    pub preview_image: Option<String>,
    /// Price of the composed bouquet in rubles
    pub price: u32,
}

impl From<ComposerSummary> for ConstructorResponse {
    fn from(summary: ComposerSummary) -> Self {
        Self {
            selected_flowers: summary.state.selected,
            prompt: summary.state.prompt,
            preview_image: summary.state.preview,
            price: summary.price,
        }
    }
}
