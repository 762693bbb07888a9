//! Response types for Rekognize API calls.
//!
//! [`HttpResponse`] is the raw exchange as received from the transport, with
//! its body already decoded into [`JsonValue`]s. [`ApiResponse`] is the
//! envelope handed to callers for successful calls.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::UNKNOWN_ERROR_MESSAGE;
use crate::clients::http_request::HttpMethod;
use crate::clients::json_object::JsonValue;

/// A response received from the service.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The final URL of the request.
    pub url: String,
    /// Response headers (lowercased names, possibly multi-valued).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded body, or `None` if the body was not valid JSON.
    pub body: Option<JsonValue>,
    /// The body as received.
    pub raw_body: String,
}

impl HttpResponse {
    /// Creates a response, decoding `body_text` as JSON.
    ///
    /// Every JSON object in the body becomes a [`JsonObject`](crate::JsonObject).
    /// A body that is not valid JSON yields `body: None`.
    #[must_use]
    pub fn new(
        code: u16,
        url: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
        body_text: &str,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            headers,
            body: serde_json::from_str::<JsonValue>(body_text).ok(),
            raw_body: body_text.to_string(),
        }
    }

    /// Returns `true` for HTTP 200.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }

    /// Returns `true` for any 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Extracts the service error code and message from the `errors` field.
    ///
    /// `errors` may be a single object or a non-empty array of objects, in
    /// which case the first element is used. Without either shape the
    /// message falls back to a generic sentinel and the code is `None`.
    #[must_use]
    pub fn error_details(&self) -> (Option<i64>, String) {
        let errors = self
            .body
            .as_ref()
            .and_then(JsonValue::as_object)
            .and_then(|body| body.get("errors").ok());

        let first = match errors {
            Some(JsonValue::Array(items)) => items.first().and_then(JsonValue::as_object),
            Some(JsonValue::Object(object)) => Some(object),
            _ => None,
        };

        first.map_or_else(
            || (None, UNKNOWN_ERROR_MESSAGE.to_string()),
            |error| {
                let code = error.get_i64("code").ok();
                let message = error
                    .get_str("message")
                    .map_or_else(|_| UNKNOWN_ERROR_MESSAGE.to_string(), String::from);
                (code, message)
            },
        )
    }
}

/// The envelope returned for a successful call.
///
/// # Example
///
/// ```rust,ignore
/// let response = client.api().segment("users").segment("show")
///     .fetch(Params::new().param("screen_name", "rekognize"))
///     .await?;
///
/// let user = response.data.as_object().unwrap();
/// println!("{} calls remaining", response.remaining.as_ref().and_then(|r| r.as_i64()).unwrap_or(0));
/// ```
#[derive(Clone)]
pub struct ApiResponse {
    /// The `data` payload.
    pub data: JsonValue,
    /// The `remaining` quota counter, if the service sent one.
    pub remaining: Option<JsonValue>,
    /// The method of the originating request.
    pub request_method: HttpMethod,
    /// The resource URL of the originating request.
    pub resource_url: String,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
}

impl ApiResponse {
    /// Returns the `remaining` counter as an integer, if present and numeric.
    #[must_use]
    pub fn remaining_calls(&self) -> Option<i64> {
        self.remaining.as_ref().and_then(JsonValue::as_i64)
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<ApiResponse: {} {}>",
            self.request_method, self.resource_url
        )
    }
}

impl fmt::Debug for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
