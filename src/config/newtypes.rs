//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// Placeholder substituted with the first path segment of every request.
pub const SUBDOMAIN_PLACEHOLDER: &str = "{subdomain}";

/// Default base API URL template.
pub const BASE_API_URL: &str = "https://{subdomain}.rekognize.io/twitter/";

/// A validated access token.
///
/// # Example
///
/// ```rust
/// use rekognize::AccessToken;
///
/// let token = AccessToken::new("12345-abcdef").unwrap();
/// assert_eq!(token.as_ref(), "12345-abcdef");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated access token secret.
///
/// The `Debug` implementation masks the secret value, displaying only
/// `AccessTokenSecret(*****)`.
///
/// ```rust
/// use rekognize::AccessTokenSecret;
///
/// let secret = AccessTokenSecret::new("s3cr3t").unwrap();
/// assert_eq!(format!("{:?}", secret), "AccessTokenSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessTokenSecret(String);

impl AccessTokenSecret {
    /// Creates a new validated access token secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessTokenSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyAccessTokenSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for AccessTokenSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessTokenSecret(*****)")
    }
}

/// A validated base API URL template.
///
/// The template must carry a scheme and exactly the `{subdomain}`
/// placeholder, which is replaced with the first segment of each resource path.
///
/// # Example
///
/// ```rust
/// use rekognize::BaseUrlTemplate;
///
/// let template = BaseUrlTemplate::new("https://{subdomain}.rekognize.io/twitter/").unwrap();
/// assert_eq!(template.expand("api"), "https://api.rekognize.io/twitter/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrlTemplate(String);

impl BaseUrlTemplate {
    /// Creates a new validated template.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the template has no scheme
    /// or no `{subdomain}` placeholder.
    pub fn new(template: impl Into<String>) -> Result<Self, ConfigError> {
        let template = template.into().trim().to_string();

        if !has_url_scheme(&template) {
            return Err(ConfigError::InvalidBaseUrl {
                url: template,
                reason: "expected a URL with scheme",
            });
        }

        if !template.contains(SUBDOMAIN_PLACEHOLDER) {
            return Err(ConfigError::InvalidBaseUrl {
                url: template,
                reason: "missing the {subdomain} placeholder",
            });
        }

        Ok(Self(template))
    }

    /// Substitutes `subdomain` into the template.
    #[must_use]
    pub fn expand(&self, subdomain: &str) -> String {
        self.0.replace(SUBDOMAIN_PLACEHOLDER, subdomain)
    }
}

impl Default for BaseUrlTemplate {
    fn default() -> Self {
        Self(BASE_API_URL.to_string())
    }
}

impl AsRef<str> for BaseUrlTemplate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns `true` if `url` starts with an alphabetic scheme followed by `://`
/// and a non-empty remainder.
pub(crate) fn has_url_scheme(url: &str) -> bool {
    url.find("://").is_some_and(|end| {
        end > 0 && url[..end].chars().all(|c| c.is_ascii_alphabetic()) && url.len() > end + 3
    })
}
