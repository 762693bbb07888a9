//! Authentication for user-context calls.
//!
//! - [`AccessCredentials`]: An access token pair sent as request headers
//! - [`UserClient`]: A dispatcher whose session carries those headers
//! - [`request_token`] / [`RequestToken`]: The request token exchange that
//!   starts a sign-in or authorize flow
//!
//! # Token lifecycle
//!
//! A [`UserClient`] is created with an initial token pair. Calling
//! [`UserClient::get_signin_token`] or [`UserClient::get_authorize_token`]
//! with `auto_set_token = true` adopts the returned pair: the session is
//! rebuilt and every later call is authenticated with the new token.
//!
//! ```rust
//! use rekognize::{AccessCredentials, AccessToken, AccessTokenSecret, ClientConfig, UserClient};
//!
//! let credentials = AccessCredentials::new(
//!     AccessToken::new("token").unwrap(),
//!     AccessTokenSecret::new("secret").unwrap(),
//! );
//! let client = UserClient::new(credentials, ClientConfig::default()).unwrap();
//!
//! assert_eq!(client.credentials().token.as_ref(), "token");
//! ```

mod credentials;
mod request_token;
mod user_client;

pub use credentials::{AccessCredentials, ACCESS_TOKEN_HEADER, ACCESS_TOKEN_SECRET_HEADER};
pub use request_token::{request_token, RequestToken, MALFORMED_TOKEN_MESSAGE};
pub use user_client::UserClient;
