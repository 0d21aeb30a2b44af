use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.validation_failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("product.invalid_id")]
    InvalidId,
    #[error("product.not_found")]
    NotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Maps a repository failure from a lookup by id, turning a missing row
    /// into `ProductError::NotFound`.
    pub fn from_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
