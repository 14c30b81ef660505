use crate::domain::errors::RepositoryError;

use super::model::CartLine;

/// Durable snapshot of the cart on the local device.
///
/// Writes are synchronous: a mutation is persisted before control returns to
/// whoever triggered it.
pub trait CartStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<CartLine>>, RepositoryError>;
    fn save(&self, lines: &[CartLine]) -> Result<(), RepositoryError>;
}
