//! Error types for Rekognize API calls.
//!
//! Every failure detected while dispatching a request is reported as a
//! [`TwitterError`]. The four request-level kinds share one context payload,
//! [`ErrorDetails`], carrying whatever was known at the point of failure.
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | [`TwitterError::Client`] | The transport failed before any HTTP response |
//! | [`TwitterError::Api`] | The service responded with a failure |
//! | [`TwitterError::RateLimit`] | The service responded with 429 |
//! | [`TwitterError::Auth`] | The service responded with 401 or rejected the credentials |
//!
//! `Api`, `RateLimit` and `Auth` are all API errors: [`TwitterError::is_api_error`]
//! is `true` for each of them.
//!
//! # Example
//!
//! ```rust,ignore
//! use rekognize::TwitterError;
//!
//! match client.api().segment("users").segment("show").fetch(params).await {
//!     Ok(response) => println!("{:?}", response.data),
//!     Err(TwitterError::RateLimit(details)) => {
//!         println!("Rate limited: {}", details.message);
//!     }
//!     Err(TwitterError::Auth(details)) => {
//!         println!("Re-authenticate (code {:?})", details.error_code);
//!     }
//!     Err(e) if e.is_api_error() => println!("API error: {e}"),
//!     Err(e) => println!("Client error: {e}"),
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::clients::http_request::HttpMethod;
use crate::error::ConfigError;

/// Message used when a non-200 response carries no recognizable error details.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error has occurred processing your request.";

/// Message used when a non-200 response body is not valid JSON.
pub const UNDECODABLE_RESPONSE_MESSAGE: &str = "unable to decode response";

/// Message used for 404 responses.
pub const INVALID_RESOURCE_MESSAGE: &str = "invalid API resource";

/// Message used when a 200 response lacks the `data` field.
pub const MISSING_DATA_MESSAGE: &str = "response is missing the data field";

/// Substring of the service message that signals rejected credentials.
pub const BAD_AUTHENTICATION_MARKER: &str = "Bad Authentication data";

/// Request context attached to an error at the point of failure.
///
/// Constructed once and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorDetails {
    /// Human-readable message.
    pub message: String,
    /// The HTTP method of the failed request.
    pub request_method: Option<HttpMethod>,
    /// The resource URL of the failed request.
    pub resource_url: Option<String>,
    /// The HTTP status code, if a response was received.
    pub status_code: Option<u16>,
    /// The service-specific error code, if the response carried one.
    pub error_code: Option<i64>,
    /// Response headers (lowercased names, possibly multi-valued).
    pub headers: Option<HashMap<String, Vec<String>>>,
}

impl ErrorDetails {
    /// Creates details carrying only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Attaches the request method and URL.
    #[must_use]
    pub fn with_request(mut self, method: HttpMethod, url: impl Into<String>) -> Self {
        self.request_method = Some(method);
        self.resource_url = Some(url.into());
        self
    }

    /// Attaches the request method alone.
    #[must_use]
    pub const fn with_request_method(mut self, method: HttpMethod) -> Self {
        self.request_method = Some(method);
        self
    }

    /// Attaches the status code and headers of a received response.
    #[must_use]
    pub fn with_response(
        mut self,
        status_code: u16,
        url: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
    ) -> Self {
        self.status_code = Some(status_code);
        self.resource_url = Some(url.into());
        self.headers = Some(headers);
        self
    }

    /// Attaches a service error code.
    #[must_use]
    pub const fn with_error_code(mut self, error_code: Option<i64>) -> Self {
        self.error_code = error_code;
        self
    }
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.request_method, &self.resource_url) {
            (Some(method), Some(url)) => write!(f, "{} ({method} {url})", self.message),
            _ => f.write_str(&self.message),
        }
    }
}

/// Errors returned by Rekognize clients.
#[derive(Debug, Error)]
pub enum TwitterError {
    /// Transport-level failure before any HTTP response was received.
    #[error("{0}")]
    Client(ErrorDetails),

    /// The service responded but flagged a failure.
    #[error("{0}")]
    Api(ErrorDetails),

    /// The service rejected the request because of rate limiting.
    #[error("{0}")]
    RateLimit(ErrorDetails),

    /// The service rejected the credentials.
    #[error("{0}")]
    Auth(ErrorDetails),

    /// A terminal verb was invoked on a path with no segments.
    #[error("Calling {method} on an empty API path is not supported.")]
    EmptyPath {
        /// The verb that was invoked.
        method: HttpMethod,
    },

    /// The HTTP method is not one the dispatcher supports.
    #[error("Unsupported HTTP method '{method}'.")]
    UnsupportedMethod {
        /// The method that was provided, uppercased.
        method: String,
    },

    /// Invalid configuration or credentials.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TwitterError {
    /// Returns the request context for the four request-level kinds.
    #[must_use]
    pub const fn details(&self) -> Option<&ErrorDetails> {
        match self {
            Self::Client(details)
            | Self::Api(details)
            | Self::RateLimit(details)
            | Self::Auth(details) => Some(details),
            Self::EmptyPath { .. } | Self::UnsupportedMethod { .. } | Self::Config(_) => None,
        }
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.details().and_then(|d| d.status_code)
    }

    /// Returns the service error code, if one was returned.
    #[must_use]
    pub fn error_code(&self) -> Option<i64> {
        self.details().and_then(|d| d.error_code)
    }

    /// Returns `true` for every kind raised from a received response.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api(_) | Self::RateLimit(_) | Self::Auth(_))
    }

    /// Returns `true` if this is a rate limit error.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimit(_))
    }

    /// Returns `true` if this is an authentication error.
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
