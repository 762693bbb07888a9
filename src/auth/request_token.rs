//! OAuth request token exchange.
//!
//! A request token is the first leg of the three-legged sign-in flow. The
//! client POSTs to the sign-in or authorize endpoint, optionally passing the
//! callback URL the user should return to, and receives a temporary token
//! pair plus the URL the user must visit to approve access.
//!
//! The service may answer with JSON (`{"oauth_token": ...}`, optionally
//! wrapped in `data`) or with an `application/x-www-form-urlencoded` body;
//! both are accepted.
//!
//! # Example
//!
//! ```rust,ignore
//! use rekognize::auth::request_token;
//!
//! let token = request_token(
//!     &client,
//!     client.config().signin_url(),
//!     Some("https://example.com/callback"),
//! )
//! .await?;
//!
//! // Redirect the user to token.auth_url
//! ```

use std::fmt;

use crate::clients::{
    sanitize_params, ErrorDetails, HttpMethod, HttpResponse, JsonObject, JsonValue, Params,
    TwitterClient, TwitterError,
};

/// Message used when a successful response does not carry a token pair.
pub const MALFORMED_TOKEN_MESSAGE: &str = "unable to parse request token";

/// A temporary token pair returned by the request token exchange.
///
/// The `Debug` implementation masks `oauth_token_secret`.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestToken {
    /// The request token.
    pub oauth_token: String,
    /// The request token secret.
    pub oauth_token_secret: String,
    /// Whether the service accepted the callback URL, if it said so.
    pub oauth_callback_confirmed: Option<bool>,
    /// The URL the user visits to approve access.
    pub auth_url: String,
}

impl fmt::Debug for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestToken")
            .field("oauth_token", &self.oauth_token)
            .field("oauth_token_secret", &"*****")
            .field("oauth_callback_confirmed", &self.oauth_callback_confirmed)
            .field("auth_url", &self.auth_url)
            .finish()
    }
}

// Verify RequestToken is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RequestToken>();
};

/// Obtains a request token from `endpoint_url`.
///
/// The request goes through `client`'s session, so it carries the same
/// default headers as every other call made by that client.
///
/// # Errors
///
/// - [`TwitterError::Client`] if the transport fails
/// - [`TwitterError::Auth`], [`TwitterError::RateLimit`] or
///   [`TwitterError::Api`] for a non-2xx response, classified like any
///   other call
/// - [`TwitterError::Api`] with [`MALFORMED_TOKEN_MESSAGE`] if a 2xx body
///   does not contain `oauth_token` and `oauth_token_secret`
pub async fn request_token(
    client: &TwitterClient,
    endpoint_url: &str,
    callback_url: Option<&str>,
) -> Result<RequestToken, TwitterError> {
    let mut params = Params::new();
    if let Some(callback) = callback_url {
        params.insert("oauth_callback", callback);
    }

    let response = client
        .http_client()
        .send(HttpMethod::Post, endpoint_url, sanitize_params(params))
        .await?;

    if !response.is_success() {
        return Err(TwitterClient::classify_failure(HttpMethod::Post, response));
    }

    let Some(fields) = TokenFields::parse(&response) else {
        tracing::warn!("Request token response from {} could not be parsed", endpoint_url);
        return Err(TwitterError::Api(
            ErrorDetails::new(MALFORMED_TOKEN_MESSAGE)
                .with_response(response.code, response.url, response.headers)
                .with_request_method(HttpMethod::Post),
        ));
    };

    tracing::debug!("Obtained request token from {}", endpoint_url);

    Ok(RequestToken {
        auth_url: format!(
            "{endpoint_url}?oauth_token={}",
            urlencoding::encode(&fields.oauth_token)
        ),
        oauth_token: fields.oauth_token,
        oauth_token_secret: fields.oauth_token_secret,
        oauth_callback_confirmed: fields.oauth_callback_confirmed,
    })
}

/// Token fields extracted from a response body.
#[derive(Debug, PartialEq, Eq)]
struct TokenFields {
    oauth_token: String,
    oauth_token_secret: String,
    oauth_callback_confirmed: Option<bool>,
}

impl TokenFields {
    fn parse(response: &HttpResponse) -> Option<Self> {
        match response.body.as_ref() {
            Some(JsonValue::Object(object)) => Self::from_object(object),
            Some(_) => None,
            None => Self::from_form(&response.raw_body),
        }
    }

    fn from_object(object: &JsonObject) -> Option<Self> {
        let object = object.get_object("data").unwrap_or(object);

        let confirmed = match object.get("oauth_callback_confirmed") {
            Ok(JsonValue::Bool(value)) => Some(*value),
            Ok(JsonValue::String(value)) => Some(value == "true"),
            _ => None,
        };

        Self::non_empty(
            object.get_str("oauth_token").ok()?.to_string(),
            object.get_str("oauth_token_secret").ok()?.to_string(),
            confirmed,
        )
    }

    fn from_form(body: &str) -> Option<Self> {
        let mut token = None;
        let mut secret = None;
        let mut confirmed = None;

        for pair in body.trim().split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let value = urlencoding::decode(&value.replace('+', " "))
                .ok()?
                .into_owned();
            match key {
                "oauth_token" => token = Some(value),
                "oauth_token_secret" => secret = Some(value),
                "oauth_callback_confirmed" => confirmed = Some(value == "true"),
                _ => {}
            }
        }

        Self::non_empty(token?, secret?, confirmed)
    }

    fn non_empty(
        oauth_token: String,
        oauth_token_secret: String,
        oauth_callback_confirmed: Option<bool>,
    ) -> Option<Self> {
        if oauth_token.is_empty() || oauth_token_secret.is_empty() {
            return None;
        }
        Some(Self {
            oauth_token,
            oauth_token_secret,
            oauth_callback_confirmed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use std::collections::HashMap;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn response(body: &str) -> HttpResponse {
        HttpResponse::new(200, "https://api.rekognize.io/twitter/oauth", HashMap::new(), body)
    }

    #[test]
    fn test_parse_plain_json() {
        let fields = TokenFields::parse(&response(
            r#"{"oauth_token": "t", "oauth_token_secret": "s", "oauth_callback_confirmed": true}"#,
        ))
        .unwrap();

        assert_eq!(fields.oauth_token, "t");
        assert_eq!(fields.oauth_token_secret, "s");
        assert_eq!(fields.oauth_callback_confirmed, Some(true));
    }

    #[test]
    fn test_parse_json_wrapped_in_data() {
        let fields = TokenFields::parse(&response(
            r#"{"data": {"oauth_token": "t", "oauth_token_secret": "s"}, "remaining": 10}"#,
        ))
        .unwrap();

        assert_eq!(fields.oauth_token, "t");
        assert!(fields.oauth_callback_confirmed.is_none());
    }

    #[test]
    fn test_parse_form_encoded() {
        let fields = TokenFields::parse(&response(
            "oauth_token=abc%2Fdef&oauth_token_secret=xyz&oauth_callback_confirmed=true",
        ))
        .unwrap();

        assert_eq!(fields.oauth_token, "abc/def");
        assert_eq!(fields.oauth_token_secret, "xyz");
        assert_eq!(fields.oauth_callback_confirmed, Some(true));
    }

    #[test]
    fn test_parse_rejects_missing_or_empty_fields() {
        assert!(TokenFields::parse(&response(r#"{"oauth_token": "t"}"#)).is_none());
        assert!(TokenFields::parse(&response("oauth_token=&oauth_token_secret=s")).is_none());
        assert!(TokenFields::parse(&response("[1, 2]")).is_none());
        assert!(TokenFields::parse(&response("")).is_none());
    }

    #[test]
    fn test_debug_masks_secret() {
        let token = RequestToken {
            oauth_token: "t".to_string(),
            oauth_token_secret: "very-secret".to_string(),
            oauth_callback_confirmed: None,
            auth_url: "https://api.rekognize.io/twitter/oauth/authenticate?oauth_token=t"
                .to_string(),
        };

        assert!(!format!("{token:?}").contains("very-secret"));
    }

    #[tokio::test]
    async fn test_request_token_sends_callback_and_builds_auth_url() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/authenticate"))
            .and(body_json(
                serde_json::json!({"oauth_callback": "https://example.com/cb"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "oauth_token": "req-token",
                "oauth_token_secret": "req-secret",
                "oauth_callback_confirmed": "true"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = TwitterClient::new(ClientConfig::default()).unwrap();
        let endpoint = format!("{}/oauth/authenticate", server.uri());

        let token = request_token(&client, &endpoint, Some("https://example.com/cb"))
            .await
            .unwrap();

        assert_eq!(token.oauth_token, "req-token");
        assert_eq!(token.oauth_token_secret, "req-secret");
        assert_eq!(token.oauth_callback_confirmed, Some(true));
        assert_eq!(token.auth_url, format!("{endpoint}?oauth_token=req-token"));
    }

    #[tokio::test]
    async fn test_request_token_without_callback_sends_empty_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/authorize"))
            .and(body_json(serde_json::json!({})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("oauth_token=form-token&oauth_token_secret=form-secret"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = TwitterClient::new(ClientConfig::default()).unwrap();
        let endpoint = format!("{}/oauth/authorize", server.uri());

        let token = request_token(&client, &endpoint, None).await.unwrap();

        assert_eq!(token.oauth_token, "form-token");
        assert!(token.oauth_callback_confirmed.is_none());
    }

    #[tokio::test]
    async fn test_request_token_unauthorized_is_auth_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/authenticate"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "errors": {"code": 32, "message": "Could not authenticate you."}
            })))
            .mount(&server)
            .await;

        let client = TwitterClient::new(ClientConfig::default()).unwrap();
        let endpoint = format!("{}/oauth/authenticate", server.uri());

        let error = request_token(&client, &endpoint, None).await.unwrap_err();

        assert!(error.is_auth_error());
        assert_eq!(error.error_code(), Some(32));
        assert_eq!(error.status_code(), Some(401));
    }

    #[tokio::test]
    async fn test_request_token_unparseable_success_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/authenticate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": 1})))
            .mount(&server)
            .await;

        let client = TwitterClient::new(ClientConfig::default()).unwrap();
        let endpoint = format!("{}/oauth/authenticate", server.uri());

        match request_token(&client, &endpoint, None).await {
            Err(TwitterError::Api(details)) => {
                assert_eq!(details.message, MALFORMED_TOKEN_MESSAGE);
                assert_eq!(details.status_code, Some(200));
                assert_eq!(details.request_method, Some(HttpMethod::Post));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
