//! Request dispatcher for the Rekognize API.
//!
//! [`TwitterClient`] is the single choke point for outbound calls: it resolves
//! resource paths into URLs, sanitizes parameters, sends the request through
//! its [`HttpClient`] session, and turns the response into an [`ApiResponse`]
//! or a classified [`TwitterError`].

use std::collections::HashMap;

use crate::clients::api_path::ApiPath;
use crate::clients::errors::{
    ErrorDetails, TwitterError, BAD_AUTHENTICATION_MARKER, INVALID_RESOURCE_MESSAGE,
    MISSING_DATA_MESSAGE, UNDECODABLE_RESPONSE_MESSAGE,
};
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{sanitize_params, HttpMethod, Params};
use crate::clients::http_response::{ApiResponse, HttpResponse};
use crate::clients::json_object::JsonValue;
use crate::config::ClientConfig;

/// Unauthenticated Rekognize API client.
///
/// Requests are dispatched one at a time; each call resolves when its
/// single HTTP exchange completes. Nothing is retried.
///
/// # Example
///
/// ```rust,ignore
/// use rekognize::{ClientConfig, Params, TwitterClient};
///
/// let client = TwitterClient::new(ClientConfig::default())?;
///
/// let response = client
///     .api()
///     .segment("api")
///     .segment("users")
///     .segment("show")
///     .fetch(Params::new().param("screen_name", "rekognize"))
///     .await?;
///
/// println!("{:?}", response.data);
/// ```
#[derive(Debug)]
pub struct TwitterClient {
    config: ClientConfig,
    http_client: HttpClient,
}

// Verify TwitterClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TwitterClient>();
};

impl TwitterClient {
    /// Creates a client without credential headers.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Client`] if the HTTP session cannot be opened.
    pub fn new(config: ClientConfig) -> Result<Self, TwitterError> {
        Self::with_headers(config, HashMap::new())
    }

    /// Creates a client whose session sends `headers` on every request.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Client`] if the HTTP session cannot be opened.
    pub fn with_headers(
        config: ClientConfig,
        headers: HashMap<String, String>,
    ) -> Result<Self, TwitterError> {
        let http_client = HttpClient::new(&config, headers)?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the HTTP session.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns a path builder with no segments.
    #[must_use]
    pub const fn api(&self) -> ApiPath<'_> {
        ApiPath::new(self)
    }

    /// Returns a path builder starting at `segment`.
    #[must_use]
    pub fn path(&self, segment: impl std::fmt::Display) -> ApiPath<'_> {
        self.api().segment(segment)
    }

    /// Dispatches one request.
    ///
    /// `path` is a slash-delimited resource path whose first segment selects
    /// the subdomain of the base URL.
    ///
    /// # Errors
    ///
    /// - [`TwitterError::Client`] if the transport fails
    /// - [`TwitterError::Auth`] for 401 or a "Bad Authentication data" message
    /// - [`TwitterError::RateLimit`] for 429
    /// - [`TwitterError::Api`] for every other failure, including an
    ///   undecodable body and a 200 response without `data`
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
    ) -> Result<ApiResponse, TwitterError> {
        let url = self.construct_resource_url(path);
        let params = sanitize_params(params);

        let response = self.http_client.send(method, &url, params).await?;

        Self::handle_response(method, response)
    }

    /// Resolves a resource path into a full URL.
    ///
    /// ```rust
    /// use rekognize::{ClientConfig, TwitterClient};
    ///
    /// let client = TwitterClient::new(ClientConfig::default()).unwrap();
    /// assert_eq!(
    ///     client.construct_resource_url("api/users/show"),
    ///     "https://api.rekognize.io/twitter/users/show"
    /// );
    /// ```
    #[must_use]
    pub fn construct_resource_url(&self, path: &str) -> String {
        let (subdomain, rest) = path.split_once('/').unwrap_or((path, ""));
        format!("{}{rest}", self.config.base_api_url().expand(subdomain))
    }

    /// Turns a received response into an envelope or a classified error.
    fn handle_response(
        method: HttpMethod,
        response: HttpResponse,
    ) -> Result<ApiResponse, TwitterError> {
        if response.is_ok() {
            return Self::envelope(method, response);
        }
        Err(Self::classify_failure(method, response))
    }

    /// Classifies a failed response into the error taxonomy.
    pub(crate) fn classify_failure(method: HttpMethod, response: HttpResponse) -> TwitterError {
        if response.body.is_none() {
            return TwitterError::Api(Self::response_details(
                UNDECODABLE_RESPONSE_MESSAGE,
                method,
                None,
                response,
            ));
        }

        let (error_code, message) = response.error_details();
        let code = response.code;

        if code == 401 || message.contains(BAD_AUTHENTICATION_MARKER) {
            return TwitterError::Auth(Self::response_details(
                message, method, error_code, response,
            ));
        }

        match code {
            404 => TwitterError::Api(Self::response_details(
                INVALID_RESOURCE_MESSAGE,
                method,
                error_code,
                response,
            )),
            429 => TwitterError::RateLimit(Self::response_details(
                message, method, error_code, response,
            )),
            _ => TwitterError::Api(Self::response_details(
                message, method, error_code, response,
            )),
        }
    }

    /// Builds the success envelope from a 200 response.
    fn envelope(method: HttpMethod, response: HttpResponse) -> Result<ApiResponse, TwitterError> {
        let body = response.body.as_ref().and_then(JsonValue::as_object);

        let Some(data) = body.and_then(|b| b.get("data").ok()).cloned() else {
            tracing::warn!(
                "Response from {} {} is missing the data field",
                method,
                response.url
            );
            return Err(TwitterError::Api(Self::response_details(
                MISSING_DATA_MESSAGE,
                method,
                None,
                response,
            )));
        };
        let remaining = body.and_then(|b| b.get("remaining").ok()).cloned();

        Ok(ApiResponse {
            data,
            remaining,
            request_method: method,
            resource_url: response.url,
            headers: response.headers,
        })
    }

    fn response_details(
        message: impl Into<String>,
        method: HttpMethod,
        error_code: Option<i64>,
        response: HttpResponse,
    ) -> ErrorDetails {
        ErrorDetails::new(message)
            .with_request_method(method)
            .with_response(response.code, response.url, response.headers)
            .with_error_code(error_code)
    }
}
