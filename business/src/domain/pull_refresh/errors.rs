#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("refresh.failed")]
    Failed(String),
    #[error("refresh.catalog")]
    Catalog(#[from] crate::domain::catalog::errors::CatalogError),
}
