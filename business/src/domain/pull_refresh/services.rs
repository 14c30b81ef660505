use async_trait::async_trait;

use super::errors::RefreshError;

/// Work triggered when a pull is released past the threshold.
///
/// Supplied by the owning view. Errors are handed back to the caller of the
/// gesture handler; the handler never retries.
#[async_trait]
pub trait RefreshOperation: Send + Sync {
    async fn refresh(&self) -> Result<(), RefreshError>;
}
