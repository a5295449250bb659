//! Process configuration
//!
//! Base URL and bearer token are read once from the environment at startup.

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.post-bridge.com";

/// Connection settings for the Post Bridge API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Read configuration from the environment.
    ///
    /// A missing token is a fatal startup error; the base URL falls back to
    /// the public endpoint.
    pub fn from_env() -> Result<Self, AppError> {
        let base_url = std::env::var("POST_BRIDGE_API_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let token = std::env::var("POST_BRIDGE_API_TOKEN")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config(
                    "API token is required. Set the POST_BRIDGE_API_TOKEN environment variable."
                        .to_string(),
                )
            })?;

        Ok(Self { base_url, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config() {
        let config = ApiConfig::new("https://staging.example.com", "pb_test");
        assert_eq!(config.base_url, "https://staging.example.com");
        assert_eq!(config.token, "pb_test");
    }
}
