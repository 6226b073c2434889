use async_trait::async_trait;
use tracing::debug;

use business::domain::catalog::model::Flower;
use business::domain::composer::errors::ComposerError;
use business::domain::composer::services::BouquetPreviewService;

/// Fixed preview returned for every composition.
const PREVIEW_IMAGE_URL: &str = "https://cdn.poehali.dev/projects/20e9b2da-3dd2-44fd-ab1b-8035bfe9ef49/files/cfd6b18b-72a0-46fc-9c55-3e4c1fb6551b.jpg";

/// Stand-in for a real image generator. It assembles the generation prompt
/// the way the production service would, then deterministically answers
/// with one fixed CDN image. No network call is made.
pub struct BouquetPreviewStub;

impl BouquetPreviewStub {
    pub fn new() -> Self {
        Self
    }

    fn build_prompt(flowers: &[Flower], wish: &str) -> String {
        let mut prompt =
            String::from("Beautiful flower bouquet, professional photography, white background");

        if !flowers.is_empty() {
            let names: Vec<&str> = flowers.iter().map(|flower| flower.name.as_str()).collect();
            prompt.push_str(&format!(", flowers: {}", names.join(", ")));
        }

        if !wish.trim().is_empty() {
            prompt.push_str(&format!(", style: {}", wish.trim()));
        }

        prompt
    }
}

impl Default for BouquetPreviewStub {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BouquetPreviewService for BouquetPreviewStub {
    async fn generate(&self, flowers: &[Flower], prompt: &str) -> Result<String, ComposerError> {
        let full_prompt = Self::build_prompt(flowers, prompt);
        debug!(target: "Florista -- ", "Preview prompt: {}", full_prompt);

        Ok(PREVIEW_IMAGE_URL.to_string())
    }
}
