//! # Rekognize Twitter API client
//!
//! A Rust client for the Rekognize Twitter proxy API, providing dynamic
//! resource paths, parameter sanitization, read-only decoded responses and
//! a classified error taxonomy.
//!
//! ## Overview
//!
//! This crate provides:
//! - Validated configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - A lazy, immutable path builder ([`ApiPath`]) with `fetch` and `submit` verbs
//! - Parameter sanitization for lists, booleans, JSON values and file uploads
//! - Read-only structured JSON objects ([`JsonObject`], [`JsonValue`])
//! - Error classification into client, API, rate limit and authentication failures
//! - Authenticated calls and the request token exchange via [`UserClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use rekognize::{ClientConfig, TwitterClient};
//!
//! let client = TwitterClient::new(ClientConfig::default()).unwrap();
//!
//! // Nothing is sent while a path is being built
//! let show = client.path("api").segment("users").segment("show");
//! assert_eq!(show.to_string(), "api/users/show");
//! assert_eq!(
//!     client.construct_resource_url(show.as_str().unwrap()),
//!     "https://api.rekognize.io/twitter/users/show"
//! );
//! ```
//!
//! ## Making Calls
//!
//! The first path segment selects the subdomain; the rest is appended to the
//! base URL. `fetch` sends a GET, `submit` sends a POST.
//!
//! ```rust,ignore
//! use rekognize::{ClientConfig, Params, TwitterClient};
//!
//! let client = TwitterClient::new(ClientConfig::default())?;
//!
//! let response = client
//!     .path("api")
//!     .segment("users")
//!     .segment("lookup")
//!     .fetch(
//!         Params::new()
//!             .param("screen_name", vec!["rekognize", "rustlang"])
//!             .param("include_entities", false),
//!     )
//!     .await?;
//!
//! for user in response.data.as_array().unwrap_or_default() {
//!     let user = user.as_object().unwrap();
//!     println!("{}", user.get_str("screen_name")?);
//! }
//! println!("{:?} calls remaining", response.remaining_calls());
//! ```
//!
//! ## Authenticated Calls
//!
//! ```rust,ignore
//! use rekognize::{AccessCredentials, AccessToken, AccessTokenSecret, ClientConfig, Params, UserClient};
//!
//! let credentials = AccessCredentials::new(
//!     AccessToken::new("token")?,
//!     AccessTokenSecret::new("secret")?,
//! );
//! let mut client = UserClient::new(credentials, ClientConfig::default())?;
//!
//! client
//!     .path("api")
//!     .segment("statuses")
//!     .segment("update")
//!     .submit(Params::new().param("status", "Hello from Rust"))
//!     .await?;
//!
//! let token = client.get_authorize_token(Some("https://example.com/cb"), false).await?;
//! println!("Authorize at {}", token.auth_url);
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use rekognize::TwitterError;
//!
//! match client.path("api").segment("users").segment("show").fetch(params).await {
//!     Ok(response) => println!("{:?}", response.data),
//!     Err(TwitterError::RateLimit(details)) => println!("Slow down: {}", details.message),
//!     Err(TwitterError::Auth(details)) => println!("Bad credentials: {:?}", details.error_code),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Immutable responses**: Decoded objects expose no mutation
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, AccessTokenSecret, BaseUrlTemplate, ClientConfig, ClientConfigBuilder};
pub use error::ConfigError;

// Re-export dispatch types
pub use clients::{
    sanitize_params, ApiPath, ApiResponse, ErrorDetails, HttpMethod, JsonObject, JsonValue,
    ParamValue, Params, PropertyError, TwitterClient, TwitterError, Upload,
};

// Re-export authentication types
pub use auth::{request_token, AccessCredentials, RequestToken, UserClient};
