/// Errors shared by all repository ports.
/// Variants carry code-style identifiers for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.storage")]
    Storage,
}
