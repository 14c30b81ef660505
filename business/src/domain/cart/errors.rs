#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.duplicate_line")]
    DuplicateLine(crate::domain::shared::value_objects::ProductId),
    #[error("cart.invalid_quantity")]
    InvalidQuantity(crate::domain::shared::value_objects::ProductId),
}
