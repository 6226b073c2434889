#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("repository.storage")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
