use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::CartError;
use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// One product in the cart.
///
/// The product record is a snapshot taken when the line was created: later
/// catalog changes (price included) do not reach lines already in the cart.
/// Stored flat, as `{id, name, ..., reviewCount, quantity}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    pub fn unit_price(&self) -> Decimal {
        self.product.price
    }

    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Outcome of [`Cart::set_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Updated,
    Removed,
    Unchanged,
}

/// Ordered cart lines, at most one per product id, every quantity >= 1.
///
/// Aggregates are computed on each read and never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from persisted lines, rejecting snapshots that break
    /// the cart invariants.
    pub fn from_lines(lines: Vec<CartLine>) -> Result<Self, CartError> {
        let mut seen = HashSet::with_capacity(lines.len());
        for line in &lines {
            if line.quantity == 0 {
                return Err(CartError::InvalidQuantity(line.product_id().clone()));
            }
            if !seen.insert(line.product_id()) {
                return Err(CartError::DuplicateLine(line.product_id().clone()));
            }
        }
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Increments the line for `product.id`, or appends a new line with
    /// quantity 1. An existing line keeps the fields it was created with.
    pub fn add(&mut self, product: &Product) -> &CartLine {
        let index = match self.position(&product.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
                index
            }
            None => {
                self.lines.push(CartLine::from_product(product.clone()));
                self.lines.len() - 1
            }
        };
        &self.lines[index]
    }

    /// Returns whether a line was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id() != id);
        self.lines.len() != before
    }

    /// Quantities below 1 remove the line. Absent ids are left alone.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> QuantityChange {
        if quantity < 1 {
            return if self.remove(id) {
                QuantityChange::Removed
            } else {
                QuantityChange::Unchanged
            };
        }

        match self.lines.iter_mut().find(|line| line.product_id() == id) {
            Some(line) => {
                line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                QuantityChange::Updated
            }
            None => QuantityChange::Unchanged,
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `unit_price * quantity` across lines.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.product_id() == id)
    }
}
