#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.name_empty")]
    NameEmpty,
    #[error("cart.price_zero")]
    PriceZero,
    #[error("cart.unknown_item")]
    UnknownItem,
    #[error("repository.storage")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
