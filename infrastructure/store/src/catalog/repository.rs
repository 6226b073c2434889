use async_trait::async_trait;

use business::domain::catalog::model::{Bouquet, Flower};
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;

use super::seed;

/// Catalog backed by the static seed. The data is immutable for the life
/// of the process.
pub struct CatalogRepositoryInMemory {
    flowers: Vec<Flower>,
    bouquets: Vec<Bouquet>,
}

impl CatalogRepositoryInMemory {
    pub fn with_seed() -> Self {
        Self {
            flowers: seed::flowers(),
            bouquets: seed::bouquets(),
        }
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryInMemory {
    async fn flowers(&self) -> Result<Vec<Flower>, RepositoryError> {
        Ok(self.flowers.clone())
    }

    async fn bouquets(&self) -> Result<Vec<Bouquet>, RepositoryError> {
        Ok(self.bouquets.clone())
    }

    async fn flower_by_id(&self, id: u32) -> Result<Flower, RepositoryError> {
        self.flowers
            .iter()
            .find(|flower| flower.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn bouquet_by_id(&self, id: u32) -> Result<Bouquet, RepositoryError> {
        self.bouquets
            .iter()
            .find(|bouquet| bouquet.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_find_seeded_flower_by_id() {
        let repository = CatalogRepositoryInMemory::with_seed();

        let flower = repository.flower_by_id(1).await.unwrap();

        assert_eq!(flower.name, "Роза красная");
        assert_eq!(flower.price, 150);
    }

    #[tokio::test]
    async fn should_report_missing_entry() {
        let repository = CatalogRepositoryInMemory::with_seed();

        let result = repository.bouquet_by_id(99).await;

        assert!(matches!(result.unwrap_err(), RepositoryError::NotFound));
    }
}
