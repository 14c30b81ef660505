use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_products::{GetProductsParams, GetProductsUseCase};
use crate::domain::logger::Logger;

pub struct GetProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsUseCase for GetProductsUseCaseImpl {
    async fn execute(&self, params: GetProductsParams) -> Result<Vec<Product>, CatalogError> {
        let products = match params.category.as_deref() {
            Some(category) => {
                self.logger
                    .info(&format!("Getting products in category: {}", category));
                self.repository.get_products_by_category(category).await?
            }
            None => {
                self.logger.info("Getting all products");
                self.repository.get_products().await?
            }
        };

        self.logger
            .info(&format!("Retrieved {} products", products.len()));
        Ok(products)
    }
}
