use poem_openapi::Object;

use business::domain::catalog::model::{Bouquet, Flower};

#[derive(Debug, Clone, Object)]
pub struct FlowerResponse {
    /// Catalog identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Price per stem in rubles
    pub price: u32,
    /// Image URL
    pub image: String,
    /// Stems on display (informational)
    pub available: u32,
}

impl From<Flower> for FlowerResponse {
    fn from(flower: Flower) -> Self {
        Self {
            id: flower.id,
            name: flower.name,
            price: flower.price,
            image: flower.image,
            available: flower.available,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BouquetResponse {
    /// Catalog identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Price in rubles
    pub price: u32,
    /// Image URL
    pub image: String,
}

impl From<Bouquet> for BouquetResponse {
    fn from(bouquet: Bouquet) -> Self {
        Self {
            id: bouquet.id,
            name: bouquet.name,
            description: bouquet.description,
            price: bouquet.price,
            image: bouquet.image,
        }
    }
}
