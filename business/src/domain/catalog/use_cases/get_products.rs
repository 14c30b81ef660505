use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;

pub struct GetProductsParams {
    pub category: Option<String>,
}

#[async_trait]
pub trait GetProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetProductsParams) -> Result<Vec<Product>, CatalogError>;
}
