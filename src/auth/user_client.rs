//! Authenticated client for user-context calls.

use std::fmt;

use crate::auth::credentials::AccessCredentials;
use crate::auth::request_token::{request_token, RequestToken};
use crate::clients::{ApiPath, ApiResponse, HttpMethod, Params, TwitterClient, TwitterError};
use crate::config::{AccessToken, AccessTokenSecret, ClientConfig};

/// A client that authenticates every call with an access token pair.
///
/// The credentials travel as default headers on the client's session.
/// Replacing them (see [`auto_set_token`](Self::auto_set_token)) rebuilds the
/// session from scratch, and needs `&mut self`, so no request can be in
/// flight on the old session while the swap happens.
///
/// # Example
///
/// ```rust,ignore
/// use rekognize::{AccessCredentials, AccessToken, AccessTokenSecret, ClientConfig, Params, UserClient};
///
/// let credentials = AccessCredentials::new(
///     AccessToken::new("token")?,
///     AccessTokenSecret::new("secret")?,
/// );
/// let mut client = UserClient::new(credentials, ClientConfig::default())?;
///
/// let timeline = client
///     .path("api")
///     .segment("statuses")
///     .segment("home_timeline")
///     .fetch(Params::new().param("count", 20_i64))
///     .await?;
///
/// // Start a sign-in flow and switch to the returned token pair
/// let token = client.get_signin_token(Some("https://example.com/cb"), true).await?;
/// println!("Send the user to {}", token.auth_url);
/// ```
pub struct UserClient {
    credentials: AccessCredentials,
    client: TwitterClient,
}

// Verify UserClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<UserClient>();
};

impl UserClient {
    /// Creates a client authenticated with `credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Client`] if the HTTP session cannot be opened.
    pub fn new(credentials: AccessCredentials, config: ClientConfig) -> Result<Self, TwitterError> {
        let client = TwitterClient::with_headers(config, credentials.headers())?;
        Ok(Self {
            credentials,
            client,
        })
    }

    /// Returns the active credentials.
    #[must_use]
    pub const fn credentials(&self) -> &AccessCredentials {
        &self.credentials
    }

    /// Returns the underlying dispatcher.
    #[must_use]
    pub const fn client(&self) -> &TwitterClient {
        &self.client
    }

    /// Returns a path builder with no segments.
    #[must_use]
    pub const fn api(&self) -> ApiPath<'_> {
        self.client.api()
    }

    /// Returns a path builder starting at `segment`.
    #[must_use]
    pub fn path(&self, segment: impl fmt::Display) -> ApiPath<'_> {
        self.client.path(segment)
    }

    /// Dispatches one authenticated request.
    ///
    /// # Errors
    ///
    /// See [`TwitterClient::request`].
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
    ) -> Result<ApiResponse, TwitterError> {
        self.client.request(method, path, params).await
    }

    /// Obtains a request token from the sign-in endpoint.
    ///
    /// When `auto_set_token` is `true` the client switches to the returned
    /// token pair before returning.
    ///
    /// # Errors
    ///
    /// Returns whatever [`request_token`] returns, or
    /// [`TwitterError::Config`] if the token cannot be adopted.
    pub async fn get_signin_token(
        &mut self,
        callback_url: Option<&str>,
        auto_set_token: bool,
    ) -> Result<RequestToken, TwitterError> {
        let endpoint = self.client.config().signin_url().to_string();
        self.get_request_token(&endpoint, callback_url, auto_set_token)
            .await
    }

    /// Obtains a request token from the authorize endpoint.
    ///
    /// When `auto_set_token` is `true` the client switches to the returned
    /// token pair before returning.
    ///
    /// # Errors
    ///
    /// Returns whatever [`request_token`] returns, or
    /// [`TwitterError::Config`] if the token cannot be adopted.
    pub async fn get_authorize_token(
        &mut self,
        callback_url: Option<&str>,
        auto_set_token: bool,
    ) -> Result<RequestToken, TwitterError> {
        let endpoint = self.client.config().authorize_url().to_string();
        self.get_request_token(&endpoint, callback_url, auto_set_token)
            .await
    }

    async fn get_request_token(
        &mut self,
        endpoint_url: &str,
        callback_url: Option<&str>,
        auto_set_token: bool,
    ) -> Result<RequestToken, TwitterError> {
        let token = request_token(&self.client, endpoint_url, callback_url).await?;
        if auto_set_token {
            self.auto_set_token(&token)?;
        }
        Ok(token)
    }

    /// Switches the client to the token pair in `token`.
    ///
    /// The session is rebuilt with the new credential headers; the previous
    /// session is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Config`] if either token field is empty, or
    /// [`TwitterError::Client`] if the new session cannot be opened. The
    /// client is unchanged on error.
    pub fn auto_set_token(&mut self, token: &RequestToken) -> Result<(), TwitterError> {
        let credentials = AccessCredentials::new(
            AccessToken::new(token.oauth_token.as_str())?,
            AccessTokenSecret::new(token.oauth_token_secret.as_str())?,
        );
        self.set_credentials(credentials)
    }

    /// Replaces the credentials and rebuilds the session.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Client`] if the new session cannot be opened.
    /// The client is unchanged on error.
    pub fn set_credentials(&mut self, credentials: AccessCredentials) -> Result<(), TwitterError> {
        let client = TwitterClient::with_headers(self.client.config().clone(), credentials.headers())?;

        tracing::debug!(
            "Switching client credentials to access token {}",
            credentials.token.as_ref()
        );

        self.client = client;
        self.credentials = credentials;
        Ok(())
    }
}

impl fmt::Debug for UserClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserClient")
            .field("credentials", &self.credentials)
            .field("config", self.client.config())
            .finish_non_exhaustive()
    }
}
