use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::ProductId;

/// A product as published by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub image: String,
    pub category: String,
    pub in_stock: bool,
    pub rating: f64,
    pub review_count: u32,
}

impl Product {
    /// True when the product carries a struck-through price higher than the
    /// current one.
    pub fn is_discounted(&self) -> bool {
        self.original_price
            .is_some_and(|original| original > self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub product_count: u32,
}
