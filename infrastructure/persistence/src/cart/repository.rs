use tracing::{debug, warn};

use business::domain::cart::model::CartLine;
use business::domain::cart::repository::CartStore;
use business::domain::errors::RepositoryError;

use crate::local_storage::{LocalStorage, StorageError};

/// Storage key holding the serialized cart lines.
pub const CART_STORAGE_KEY: &str = "qfifat-cart";

pub struct CartRepositoryLocal {
    storage: LocalStorage,
    key: String,
}

impl CartRepositoryLocal {
    pub fn new(storage: LocalStorage) -> Self {
        Self::with_key(storage, CART_STORAGE_KEY)
    }

    pub fn with_key(storage: LocalStorage, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

fn to_repository_error(e: StorageError) -> RepositoryError {
    match e {
        StorageError::Io(_) => RepositoryError::Persistence,
        StorageError::Serialization(_) => RepositoryError::Corrupted,
    }
}

impl CartStore for CartRepositoryLocal {
    fn load(&self) -> Result<Option<Vec<CartLine>>, RepositoryError> {
        self.storage
            .get_json::<Vec<CartLine>>(&self.key)
            .map_err(|e| {
                warn!(key = %self.key, error = %e, "Failed to read cart snapshot");
                to_repository_error(e)
            })
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), RepositoryError> {
        self.storage.set_json(&self.key, lines).map_err(|e| {
            warn!(key = %self.key, error = %e, "Failed to write cart snapshot");
            to_repository_error(e)
        })?;

        debug!(key = %self.key, lines = lines.len(), "Cart snapshot written");
        Ok(())
    }
}
