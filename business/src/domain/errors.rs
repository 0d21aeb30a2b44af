/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// Any failure while talking to the store. Carries the driver's message
    /// for diagnostics only.
    #[error("repository.database_error: {0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn database_error(detail: impl Into<String>) -> Self {
        RepositoryError::DatabaseError(detail.into())
    }

    /// Driver message attached to a store failure, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            RepositoryError::NotFound => None,
            RepositoryError::DatabaseError(detail) => Some(detail),
        }
    }
}
