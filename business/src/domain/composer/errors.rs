#[derive(Debug, thiserror::Error)]
pub enum ComposerError {
    #[error("composer.selection_empty")]
    SelectionEmpty,
    #[error("composer.unknown_flower")]
    UnknownFlower,
    #[error("composer.generation_failed")]
    GenerationFailed,
    #[error("composer.cart")]
    Cart(#[from] crate::domain::cart::errors::CartError),
    #[error("repository.storage")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
