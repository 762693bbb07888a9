//! Transport session for Rekognize API calls.
//!
//! [`HttpClient`] owns the `reqwest` client and the headers sent with every
//! request. It performs exactly one exchange per call and never retries.

use std::collections::HashMap;

use reqwest::multipart::{Form, Part};

use crate::clients::errors::{ErrorDetails, TwitterError};
use crate::clients::http_request::{HttpMethod, SanitizedParams};
use crate::clients::http_response::HttpResponse;
use crate::config::ClientConfig;

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP session used by the dispatcher.
///
/// The session holds default headers (`User-Agent`, `Accept`, and any
/// credential headers) that are attached to every request. Changing
/// credentials means building a new session.
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Opens a session with the configured user agent and `extra_headers`.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Client`] if the TLS backend cannot be initialized.
    pub fn new(
        config: &ClientConfig,
        extra_headers: HashMap<String, String>,
    ) -> Result<Self, TwitterError> {
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), config.user_agent_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.extend(extra_headers);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| {
                TwitterError::Client(ErrorDetails::new(format!(
                    "Failed to create HTTP client: {e}"
                )))
            })?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Returns the default headers for this session.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends one request and decodes the response body.
    ///
    /// GET requests carry `params` as the query string. POST requests carry
    /// them as a JSON body, or as `multipart/form-data` when files are present.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Client`] carrying `method` and `url` if the
    /// transport fails or an upload cannot be read. Any HTTP status is a
    /// successful exchange at this layer.
    pub async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        params: SanitizedParams,
    ) -> Result<HttpResponse, TwitterError> {
        let transport_error = |message: String| {
            TwitterError::Client(ErrorDetails::new(message).with_request(method, url))
        };

        let mut req_builder = match method {
            HttpMethod::Get => {
                if !params.files.is_empty() {
                    tracing::warn!(
                        "Dropping {} file parameter(s) from GET request to {}",
                        params.files.len(),
                        url
                    );
                }
                self.client.get(url).query(&params.query_pairs())
            }
            HttpMethod::Post if params.files.is_empty() => {
                self.client.post(url).json(&params.params)
            }
            HttpMethod::Post => {
                let form = Self::multipart_form(params).map_err(|e| transport_error(e.to_string()))?;
                self.client.post(url).multipart(form)
            }
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        tracing::debug!("{} {}", method, url);

        let res = req_builder
            .send()
            .await
            .map_err(|e| transport_error(e.to_string()))?;

        let code = res.status().as_u16();
        let final_url = res.url().to_string();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res
            .text()
            .await
            .map_err(|e| transport_error(e.to_string()))?;

        tracing::debug!("{} {} -> {}", method, url, code);

        Ok(HttpResponse::new(code, final_url, res_headers, &body_text))
    }

    /// Builds a multipart form from plain params and uploads.
    fn multipart_form(params: SanitizedParams) -> std::io::Result<Form> {
        let text_fields = params.query_pairs();
        let mut form = Form::new();

        for (key, value) in text_fields {
            form = form.text(key, value);
        }

        for (key, upload) in params.files {
            let (file_name, bytes) = upload.read_all()?;
            let mut part = Part::bytes(bytes);
            if let Some(name) = file_name {
                part = part.file_name(name);
            }
            form = form.part(key, part);
        }

        Ok(form)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.default_headers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("HttpClient")
            .field("default_headers", &names)
            .finish_non_exhaustive()
    }
}
