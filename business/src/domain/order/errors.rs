#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.cart_empty")]
    CartEmpty,
    #[error("order.customer_name_empty")]
    CustomerNameEmpty,
    #[error("order.customer_phone_empty")]
    CustomerPhoneEmpty,
    #[error("order.customer_address_empty")]
    CustomerAddressEmpty,
    #[error("order.not_found")]
    NotFound,
    #[error("order.illegal_transition")]
    IllegalTransition,
    #[error("repository.storage")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
