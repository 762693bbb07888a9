//! Configuration types for the Rekognize client.
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: Base URL template, version, user agent and OAuth endpoints
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`AccessToken`] / [`AccessTokenSecret`]: Validated credential newtypes
//! - [`BaseUrlTemplate`]: A validated `{subdomain}` URL template
//!
//! # Example
//!
//! ```rust
//! use rekognize::{BaseUrlTemplate, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .base_api_url(BaseUrlTemplate::new("https://{subdomain}.rekognize.io/twitter/").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_version(), "1");
//! ```

mod newtypes;

pub use newtypes::{
    AccessToken, AccessTokenSecret, BaseUrlTemplate, BASE_API_URL, SUBDOMAIN_PLACEHOLDER,
};

use crate::clients::SDK_VERSION;
use crate::error::ConfigError;
use newtypes::has_url_scheme;

/// Default API version reported in the user agent.
pub const API_VERSION: &str = "1";

/// Default client identifier sent as the `User-Agent`.
pub const USER_AGENT: &str = "Rekognize Twitter Client";

/// Default endpoint for the sign-in token flow.
pub const SIGNIN_URL: &str = "https://api.rekognize.io/twitter/oauth/authenticate";

/// Default endpoint for the authorize token flow.
pub const AUTHORIZE_URL: &str = "https://api.rekognize.io/twitter/oauth/authorize";

/// Configuration shared by every client.
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`; clients keep their own copy.
///
/// # Example
///
/// ```rust
/// use rekognize::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.base_api_url().as_ref(), "https://{subdomain}.rekognize.io/twitter/");
/// assert_eq!(config.user_agent(), "Rekognize Twitter Client");
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_api_url: BaseUrlTemplate,
    api_version: String,
    user_agent: String,
    user_agent_prefix: Option<String>,
    signin_url: String,
    authorize_url: String,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the base API URL template.
    #[must_use]
    pub const fn base_api_url(&self) -> &BaseUrlTemplate {
        &self.base_api_url
    }

    /// Returns the API version.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns the client identifier.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the full `User-Agent` header value.
    ///
    /// ```rust
    /// use rekognize::ClientConfig;
    ///
    /// let config = ClientConfig::builder().user_agent_prefix("MyApp/1.0").build().unwrap();
    /// assert!(config.user_agent_string().starts_with("MyApp/1.0 | Rekognize Twitter Client"));
    /// ```
    #[must_use]
    pub fn user_agent_string(&self) -> String {
        let prefix = self
            .user_agent_prefix
            .as_ref()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        format!(
            "{prefix}{} v{} | Rust client {}",
            self.user_agent,
            self.api_version,
            SDK_VERSION
        )
    }

    /// Returns the sign-in token endpoint.
    #[must_use]
    pub fn signin_url(&self) -> &str {
        &self.signin_url
    }

    /// Returns the authorize token endpoint.
    #[must_use]
    pub fn authorize_url(&self) -> &str {
        &self.authorize_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_api_url: BaseUrlTemplate::default(),
            api_version: API_VERSION.to_string(),
            user_agent: USER_AGENT.to_string(),
            user_agent_prefix: None,
            signin_url: SIGNIN_URL.to_string(),
            authorize_url: AUTHORIZE_URL.to_string(),
        }
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Every field is optional; unset fields take the defaults of
/// [`ClientConfig::default`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_api_url: Option<BaseUrlTemplate>,
    api_version: Option<String>,
    user_agent: Option<String>,
    user_agent_prefix: Option<String>,
    signin_url: Option<String>,
    authorize_url: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base API URL template.
    #[must_use]
    pub fn base_api_url(mut self, template: BaseUrlTemplate) -> Self {
        self.base_api_url = Some(template);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets the client identifier.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the sign-in token endpoint.
    #[must_use]
    pub fn signin_url(mut self, url: impl Into<String>) -> Self {
        self.signin_url = Some(url.into());
        self
    }

    /// Sets the authorize token endpoint.
    #[must_use]
    pub fn authorize_url(mut self, url: impl Into<String>) -> Self {
        self.authorize_url = Some(url.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if a configured OAuth
    /// endpoint has no URL scheme.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let defaults = ClientConfig::default();

        let signin_url = validate_endpoint(self.signin_url)?.unwrap_or(defaults.signin_url);
        let authorize_url =
            validate_endpoint(self.authorize_url)?.unwrap_or(defaults.authorize_url);

        Ok(ClientConfig {
            base_api_url: self.base_api_url.unwrap_or(defaults.base_api_url),
            api_version: self.api_version.unwrap_or(defaults.api_version),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            user_agent_prefix: self.user_agent_prefix,
            signin_url,
            authorize_url,
        })
    }
}

fn validate_endpoint(url: Option<String>) -> Result<Option<String>, ConfigError> {
    match url {
        Some(url) if !has_url_scheme(&url) => Err(ConfigError::InvalidEndpointUrl { url }),
        other => Ok(other),
    }
}
