pub mod app_config;
pub mod backend_config;
pub mod gesture_config;
pub mod storage_config;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config.invalid_backend_url")]
    InvalidBackendUrl(#[from] url::ParseError),
    #[error("config.missing_backend_key")]
    MissingBackendKey,
}
