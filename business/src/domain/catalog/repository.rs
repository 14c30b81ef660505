use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::{Category, Product};

/// Read-only access to the hosted product catalog.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get_products(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn get_product_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    async fn get_categories(&self) -> Result<Vec<Category>, RepositoryError>;
}
