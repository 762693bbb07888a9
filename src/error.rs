//! Configuration error types for the Rekognize client.
//!
//! Every validated configuration value returns `Result<T, ConfigError>` from
//! its constructor, so a misconfigured client fails before any request is made.
//!
//! # Example
//!
//! ```rust
//! use rekognize::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid access token.")]
    EmptyAccessToken,

    /// Access token secret cannot be empty.
    #[error("Access token secret cannot be empty. Please provide a valid access token secret.")]
    EmptyAccessTokenSecret,

    /// The base API URL template is malformed.
    #[error("Invalid base API URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The template that was provided.
        url: String,
        /// Why the template was rejected.
        reason: &'static str,
    },

    /// An OAuth endpoint URL is malformed.
    #[error("Invalid endpoint URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.example.com/oauth').")]
    InvalidEndpointUrl {
        /// The URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_access_token_error_message() {
        let message = ConfigError::EmptyAccessToken.to_string();
        assert!(message.contains("Access token cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_includes_url_and_reason() {
        let error = ConfigError::InvalidBaseUrl {
            url: "https://api.example.com/".to_string(),
            reason: "missing the {subdomain} placeholder",
        };
        let message = error.to_string();
        assert!(message.contains("https://api.example.com/"));
        assert!(message.contains("{subdomain}"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccessTokenSecret;
        let _: &dyn std::error::Error = &error;
    }
}
