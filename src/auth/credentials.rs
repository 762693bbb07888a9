//! Access credentials for authenticated calls.

use std::collections::HashMap;

use crate::config::{AccessToken, AccessTokenSecret};

/// Header carrying the access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Access-Token";

/// Header carrying the access token secret.
pub const ACCESS_TOKEN_SECRET_HEADER: &str = "X-Access-Token-Secret";

/// An access token pair.
///
/// The secret is masked in `Debug` output.
///
/// # Example
///
/// ```rust
/// use rekognize::{AccessCredentials, AccessToken, AccessTokenSecret};
///
/// let credentials = AccessCredentials::new(
///     AccessToken::new("token").unwrap(),
///     AccessTokenSecret::new("secret").unwrap(),
/// );
///
/// assert_eq!(credentials.headers()["X-Access-Token"], "token");
/// assert!(format!("{credentials:?}").contains("AccessTokenSecret(*****)"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessCredentials {
    /// The access token.
    pub token: AccessToken,
    /// The access token secret.
    pub secret: AccessTokenSecret,
}

impl AccessCredentials {
    /// Creates a credential pair.
    #[must_use]
    pub const fn new(token: AccessToken, secret: AccessTokenSecret) -> Self {
        Self { token, secret }
    }

    /// Returns the headers that authenticate a session with this pair.
    #[must_use]
    pub fn headers(&self) -> HashMap<String, String> {
        HashMap::from([
            (
                ACCESS_TOKEN_HEADER.to_string(),
                self.token.as_ref().to_string(),
            ),
            (
                ACCESS_TOKEN_SECRET_HEADER.to_string(),
                self.secret.as_ref().to_string(),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_carry_both_values() {
        let credentials = AccessCredentials::new(
            AccessToken::new("t-123").unwrap(),
            AccessTokenSecret::new("s-456").unwrap(),
        );
        let headers = credentials.headers();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers[ACCESS_TOKEN_HEADER], "t-123");
        assert_eq!(headers[ACCESS_TOKEN_SECRET_HEADER], "s-456");
    }

    #[test]
    fn test_debug_masks_secret() {
        let credentials = AccessCredentials::new(
            AccessToken::new("t-123").unwrap(),
            AccessTokenSecret::new("s-456").unwrap(),
        );
        let debug = format!("{credentials:?}");

        assert!(debug.contains("t-123"));
        assert!(!debug.contains("s-456"));
    }
}
