use std::env;

use url::Url;

use super::ConfigError;

/// Access to the hosted backend project.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: Url,
    pub api_key: String,
}

impl BackendConfig {
    /// Environment variables:
    /// - BACKEND_URL: project base URL (optional; no catalog without it)
    /// - BACKEND_ANON_KEY: public API key (required when BACKEND_URL is set)
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Option<Self>, ConfigError> {
        let Some(raw_url) = var("BACKEND_URL").filter(|v| !v.trim().is_empty()) else {
            return Ok(None);
        };

        let url = Url::parse(raw_url.trim())?;
        let api_key = var("BACKEND_ANON_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingBackendKey)?;

        Ok(Some(Self { url, api_key }))
    }
}
