//! Error types and argument validation for the Post Bridge MCP server

use serde::Serialize;
use std::fmt;

/// Application error types
#[derive(Debug, Serialize)]
pub enum AppError {
    InvalidInput(String),
    Config(String),
    Network(String),
    Api(String),
    Parse(String),
    Timeout(String),
    Io(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Api(msg) => write!(f, "API error: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            AppError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Get the error code for MCP responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Config(_) => "config_error",
            AppError::Network(_) => "network_error",
            AppError::Api(_) => "api_error",
            AppError::Parse(_) => "parse_error",
            AppError::Timeout(_) => "timeout",
            AppError::Io(_) => "io_error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Convert reqwest::Error to AppError
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

/// Convert serde_json::Error to AppError
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Convert std::io::Error to AppError
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Validation functions
///
/// Every list tool takes the same pagination window: limit 1..=200, offset
/// only bounded below by the unsigned type (negatives are rejected at parse
/// time, before any of this runs).
pub fn validate_limit(limit: u64) -> Result<(), AppError> {
    if limit < 1 || limit > 200 {
        return Err(AppError::InvalidInput(format!(
            "limit must be between 1 and 200, got {}",
            limit
        )));
    }
    Ok(())
}

/// A filter array may be omitted, but when provided it must not be empty
pub fn validate_filter<T>(name: &str, values: Option<&Vec<T>>) -> Result<(), AppError> {
    if let Some(values) = values {
        if values.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "{} filter must not be empty when provided",
                name
            )));
        }
    }
    Ok(())
}

pub fn validate_string_id(id: &str, what: &str) -> Result<(), AppError> {
    if id.is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be empty", what)));
    }
    Ok(())
}

pub fn validate_numeric_id(id: u64, what: &str) -> Result<(), AppError> {
    if id == 0 {
        return Err(AppError::InvalidInput(format!("{} must be positive", what)));
    }
    Ok(())
}

pub fn validate_caption(caption: &str) -> Result<(), AppError> {
    if caption.is_empty() {
        return Err(AppError::InvalidInput("caption must not be empty".to_string()));
    }
    Ok(())
}

pub fn validate_social_accounts(ids: &[u64]) -> Result<(), AppError> {
    if ids.is_empty() {
        return Err(AppError::InvalidInput(
            "socialAccounts must contain at least one account ID".to_string(),
        ));
    }
    if ids.iter().any(|id| *id == 0) {
        return Err(AppError::InvalidInput(
            "socialAccounts entries must be positive".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_media_urls(urls: &[String]) -> Result<(), AppError> {
    for candidate in urls {
        if url::Url::parse(candidate).is_err() {
            return Err(AppError::InvalidInput(format!(
                "mediaUrls entry is not a valid URL: {}",
                candidate
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_bounds() {
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(201).is_err());
        assert!(validate_limit(1).is_ok());
        assert!(validate_limit(50).is_ok());
        assert!(validate_limit(200).is_ok());
    }

    #[test]
    fn test_filter_empty_when_provided() {
        let empty: Vec<String> = vec![];
        assert!(validate_filter("platform", Some(&empty)).is_err());
        assert!(validate_filter::<String>("platform", None).is_ok());
        assert!(validate_filter("platform", Some(&vec!["twitter".to_string()])).is_ok());
    }

    #[test]
    fn test_id_validation() {
        assert!(validate_string_id("", "Post ID").is_err());
        assert!(validate_string_id("post_1", "Post ID").is_ok());
        assert!(validate_numeric_id(0, "Social Account ID").is_err());
        assert!(validate_numeric_id(7, "Social Account ID").is_ok());
    }

    #[test]
    fn test_social_accounts_validation() {
        assert!(validate_social_accounts(&[]).is_err());
        assert!(validate_social_accounts(&[0]).is_err());
        assert!(validate_social_accounts(&[1, 2]).is_ok());
    }

    #[test]
    fn test_media_urls_validation() {
        assert!(validate_media_urls(&["https://example.com/a.png".to_string()]).is_ok());
        assert!(validate_media_urls(&["not a url".to_string()]).is_err());
    }
}
