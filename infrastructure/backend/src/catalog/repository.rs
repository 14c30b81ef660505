use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use business::domain::catalog::model::{Category, Product};
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

use super::dto::{CategoryRow, ProductRow};
use crate::client::BackendClient;

const PRODUCTS_TABLE: &str = "products";
const CATEGORIES_TABLE: &str = "categories";

pub struct CatalogRepositoryRest {
    client: BackendClient,
}

impl CatalogRepositoryRest {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    fn products_query(category: Option<&str>) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("select", "*".to_string()),
            ("order", "name.asc".to_string()),
        ];
        if let Some(category) = category {
            query.push(("category", format!("eq.{}", category)));
        }
        query
    }

    fn product_by_id_query(id: &ProductId) -> Vec<(&'static str, String)> {
        vec![
            ("select", "*".to_string()),
            ("id", format!("eq.{}", id)),
            ("limit", "1".to_string()),
        ]
    }

    fn categories_query() -> Vec<(&'static str, String)> {
        vec![
            ("select", "*".to_string()),
            ("order", "name.asc".to_string()),
        ]
    }

    async fn fetch_rows<T: DeserializeOwned>(
        request: RequestBuilder,
    ) -> Result<Vec<T>, RepositoryError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Backend request failed");
            RepositoryError::Unavailable
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Backend returned an error status");
            return Err(RepositoryError::Persistence);
        }

        response.json::<Vec<T>>().await.map_err(|e| {
            warn!(error = %e, "Backend response could not be decoded");
            RepositoryError::Persistence
        })
    }

    async fn fetch_products(&self, category: Option<&str>) -> Result<Vec<Product>, RepositoryError> {
        let request = self
            .client
            .select(PRODUCTS_TABLE, &Self::products_query(category));
        let rows = Self::fetch_rows::<ProductRow>(request).await?;

        debug!(count = rows.len(), "Fetched product rows");
        Ok(rows.into_iter().map(ProductRow::into_domain).collect())
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryRest {
    async fn get_products(&self) -> Result<Vec<Product>, RepositoryError> {
        self.fetch_products(None).await
    }

    async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, RepositoryError> {
        self.fetch_products(Some(category)).await
    }

    async fn get_product_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let request = self
            .client
            .select(PRODUCTS_TABLE, &Self::product_by_id_query(id));
        let rows = Self::fetch_rows::<ProductRow>(request).await?;

        rows.into_iter()
            .next()
            .map(ProductRow::into_domain)
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let request = self
            .client
            .select(CATEGORIES_TABLE, &Self::categories_query());
        let rows = Self::fetch_rows::<CategoryRow>(request).await?;

        Ok(rows.into_iter().map(CategoryRow::into_domain).collect())
    }
}
