/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    /// Stored data exists but cannot be decoded.
    #[error("repository.corrupted")]
    Corrupted,
    /// The remote data source could not be reached.
    #[error("repository.unavailable")]
    Unavailable,
}
