use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Bouquet, Flower};

/// Read-only access to the showcase data seeded at startup.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn flowers(&self) -> Result<Vec<Flower>, RepositoryError>;
    async fn bouquets(&self) -> Result<Vec<Bouquet>, RepositoryError>;
    async fn flower_by_id(&self, id: u32) -> Result<Flower, RepositoryError>;
    async fn bouquet_by_id(&self, id: u32) -> Result<Bouquet, RepositoryError>;
}
