use business::domain::pull_refresh::model::PullConfig;

use super::{
    ConfigError, backend_config::BackendConfig, gesture_config, storage_config::StorageConfig,
};

pub struct AppConfig {
    pub storage: StorageConfig,
    /// `None` when no backend is configured; catalog commands are then
    /// unavailable but the cart still works.
    pub backend: Option<BackendConfig>,
    pub gesture: PullConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            storage: StorageConfig::from_env(),
            backend: BackendConfig::from_env()?,
            gesture: gesture_config::from_env(),
        })
    }
}
