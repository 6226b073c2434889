#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.flower_not_found")]
    FlowerNotFound,
    #[error("catalog.bouquet_not_found")]
    BouquetNotFound,
    #[error("repository.storage")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
