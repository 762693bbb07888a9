//! Lazy resource path builder.
//!
//! An [`ApiPath`] accumulates slash-delimited segments without touching the
//! network. Each [`segment`](ApiPath::segment) call returns a new value and
//! leaves the original untouched, so partially built paths can be kept and
//! reused. Only the terminal verbs [`fetch`](ApiPath::fetch) and
//! [`submit`](ApiPath::submit) dispatch a request.
//!
//! # Example
//!
//! ```rust
//! use rekognize::{ClientConfig, TwitterClient};
//!
//! let client = TwitterClient::new(ClientConfig::default()).unwrap();
//!
//! let statuses = client.path("api").segment("statuses");
//! let timeline = statuses.segment("user_timeline");
//! let show = statuses.segment("show").segment(20);
//!
//! assert_eq!(statuses.as_str(), Some("api/statuses"));
//! assert_eq!(timeline.to_string(), "api/statuses/user_timeline");
//! assert_eq!(show.to_string(), "api/statuses/show/20");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::clients::client::TwitterClient;
use crate::clients::errors::TwitterError;
use crate::clients::http_request::{HttpMethod, Params};
use crate::clients::http_response::ApiResponse;

/// A resource path bound to the client that will dispatch it.
#[derive(Clone)]
pub struct ApiPath<'c> {
    client: &'c TwitterClient,
    path: Option<Arc<str>>,
}

impl<'c> ApiPath<'c> {
    /// Creates a path with no segments.
    #[must_use]
    pub const fn new(client: &'c TwitterClient) -> Self {
        Self { client, path: None }
    }

    /// Returns a new path with `segment` appended.
    #[must_use]
    pub fn segment(&self, segment: impl fmt::Display) -> Self {
        let path = match &self.path {
            Some(parent) => format!("{parent}/{segment}"),
            None => segment.to_string(),
        };
        Self {
            client: self.client,
            path: Some(path.into()),
        }
    }

    /// Returns the accumulated path, or `None` for a root path.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Sends a GET request for this path.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::EmptyPath`] without any network call if the
    /// path is empty; otherwise whatever the dispatcher returns.
    pub async fn fetch(&self, params: Params) -> Result<ApiResponse, TwitterError> {
        self.dispatch(HttpMethod::Get, params).await
    }

    /// Sends a POST request for this path.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::EmptyPath`] without any network call if the
    /// path is empty; otherwise whatever the dispatcher returns.
    pub async fn submit(&self, params: Params) -> Result<ApiResponse, TwitterError> {
        self.dispatch(HttpMethod::Post, params).await
    }

    async fn dispatch(&self, method: HttpMethod, params: Params) -> Result<ApiResponse, TwitterError> {
        let path = self
            .path
            .as_deref()
            .filter(|path| !path.is_empty())
            .ok_or(TwitterError::EmptyPath { method })?;
        self.client.request(method, path, params).await
    }
}

impl fmt::Display for ApiPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path.as_deref().unwrap_or_default())
    }
}

impl fmt::Debug for ApiPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<ApiPath: {}>", self.path.as_deref().unwrap_or("None"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn create_test_client() -> TwitterClient {
        TwitterClient::new(ClientConfig::default()).unwrap()
    }

    #[test]
    fn test_root_path_is_empty() {
        let client = create_test_client();
        let root = client.api();

        assert!(root.as_str().is_none());
        assert_eq!(root.to_string(), "");
        assert_eq!(format!("{root:?}"), "<ApiPath: None>");
    }

    #[test]
    fn test_first_segment_has_no_leading_slash() {
        let client = create_test_client();
        assert_eq!(client.api().segment("api").as_str(), Some("api"));
    }

    #[test]
    fn test_building_does_not_mutate_parent() {
        let client = create_test_client();
        let parent = client.path("api");
        let child = parent.segment("users");
        let grandchild = child.segment("show");

        assert_eq!(parent.as_str(), Some("api"));
        assert_eq!(child.as_str(), Some("api/users"));
        assert_eq!(grandchild.as_str(), Some("api/users/show"));
    }

    #[test]
    fn test_chained_and_stepwise_building_agree() {
        let client = create_test_client();
        let chained = client.path("api").segment("users").segment("show");

        let first = client.path("api");
        let second = first.segment("users");
        let third = second.segment("show");

        assert_eq!(chained.to_string(), third.to_string());
        assert_eq!(first.to_string(), "api");
    }

    #[test]
    fn test_indexed_segments_accept_numbers() {
        let client = create_test_client();
        let path = client.path("api").segment("statuses").segment(1234_u64);
        assert_eq!(path.to_string(), "api/statuses/1234");
    }

    #[test]
    fn test_debug_format() {
        let client = create_test_client();
        let path = client.path("api").segment("users");
        assert_eq!(format!("{path:?}"), "<ApiPath: api/users>");
    }

    #[tokio::test]
    async fn test_fetch_on_root_is_usage_error() {
        let client = create_test_client();
        let result = client.api().fetch(Params::new()).await;

        assert!(matches!(
            result,
            Err(TwitterError::EmptyPath {
                method: HttpMethod::Get
            })
        ));
    }

    #[tokio::test]
    async fn test_empty_segment_is_usage_error() {
        let client = create_test_client();
        let result = client.path("").fetch(Params::new()).await;

        assert!(matches!(
            result,
            Err(TwitterError::EmptyPath {
                method: HttpMethod::Get
            })
        ));
    }

    #[tokio::test]
    async fn test_submit_on_root_is_usage_error() {
        let client = create_test_client();
        let result = client.api().submit(Params::new()).await;

        assert!(matches!(
            result,
            Err(TwitterError::EmptyPath {
                method: HttpMethod::Post
            })
        ));
    }
}
