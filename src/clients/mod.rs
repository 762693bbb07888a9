//! Request dispatch for the Rekognize API.
//!
//! This module provides the request/response pipeline: path building,
//! parameter sanitization, HTTP dispatch, JSON decoding into read-only
//! structured objects, and error classification.
//!
//! # Overview
//!
//! - [`TwitterClient`]: The dispatcher that owns the HTTP session
//! - [`ApiPath`]: A lazy, immutable resource path with `fetch` / `submit` verbs
//! - [`HttpClient`]: The transport session and its default headers
//! - [`Params`] / [`ParamValue`] / [`Upload`]: Request parameters
//! - [`ApiResponse`]: The envelope for successful calls
//! - [`JsonObject`] / [`JsonValue`]: Read-only decoded JSON
//! - [`TwitterError`] / [`ErrorDetails`]: Classified failures
//!
//! # Example
//!
//! ```rust,ignore
//! use rekognize::{ClientConfig, Params, TwitterClient};
//!
//! let client = TwitterClient::new(ClientConfig::default())?;
//! let users = client.path("api").segment("users");
//!
//! let show = users.segment("show").fetch(Params::new().param("screen_name", "rekognize")).await?;
//! let lookup = users.segment("lookup").fetch(Params::new().param("user_id", vec!["1", "2"])).await?;
//! ```
//!
//! # Error Classification
//!
//! | Condition | Error |
//! |-----------|-------|
//! | Transport failure | [`TwitterError::Client`] |
//! | Non-200 with a body that is not JSON | [`TwitterError::Api`] ("unable to decode response") |
//! | 401, or a message containing "Bad Authentication data" | [`TwitterError::Auth`] |
//! | 404 | [`TwitterError::Api`] ("invalid API resource") |
//! | 429 | [`TwitterError::RateLimit`] |
//! | Any other non-200 | [`TwitterError::Api`] with the service message |

mod api_path;
mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod json_object;

pub use api_path::ApiPath;
pub use client::TwitterClient;
pub use errors::{
    ErrorDetails, TwitterError, BAD_AUTHENTICATION_MARKER, INVALID_RESOURCE_MESSAGE,
    MISSING_DATA_MESSAGE, UNDECODABLE_RESPONSE_MESSAGE, UNKNOWN_ERROR_MESSAGE,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{sanitize_params, HttpMethod, ParamValue, Params, SanitizedParams, Upload};
pub use http_response::{ApiResponse, HttpResponse};
pub use json_object::{JsonObject, JsonValue, PropertyError};
