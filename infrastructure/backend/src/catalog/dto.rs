use rust_decimal::Decimal;
use serde::Deserialize;

use business::domain::catalog::model::{Category, Product};
use business::domain::shared::value_objects::ProductId;

/// Row ids come back as text or integers depending on the column type.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Text(String),
    Number(i64),
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowId::Text(id) => write!(f, "{}", id),
            RowId::Number(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductRow {
    pub id: RowId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
}

fn default_in_stock() -> bool {
    true
}

impl ProductRow {
    pub fn into_domain(self) -> Product {
        Product {
            id: ProductId::new(self.id.to_string()),
            name: self.name,
            description: self.description.unwrap_or_default(),
            price: self.price,
            original_price: self.original_price,
            image: self.image.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            in_stock: self.in_stock,
            rating: self.rating.unwrap_or_default(),
            review_count: self.review_count.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryRow {
    pub id: RowId,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub product_count: Option<u32>,
}

impl CategoryRow {
    pub fn into_domain(self) -> Category {
        Category {
            id: self.id.to_string(),
            name: self.name,
            icon: self.icon.unwrap_or_default(),
            product_count: self.product_count.unwrap_or_default(),
        }
    }
}
