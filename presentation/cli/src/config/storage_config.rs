use std::env;
use std::path::PathBuf;

/// Where the device-local store keeps its files.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Environment variables:
    /// - STOREFRONT_DATA_DIR: storage directory
    ///   (default: platform data dir + "/qfifat", or "./.qfifat")
    pub fn from_env() -> Self {
        let data_dir = env::var("STOREFRONT_DATA_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        Self { data_dir }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("qfifat"))
        .unwrap_or_else(|| PathBuf::from(".qfifat"))
}
