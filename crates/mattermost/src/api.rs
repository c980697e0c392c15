//! Authenticated client for the Mattermost REST API (`/api/v4`).
//!
//! One HTTPS request per call, no retries, no cached state. Transport and
//! service failures are normalized into the four-variant [`ApiError`]
//! taxonomy, which the operation modules map onto operator-facing
//! [`herald_notify::Error`] messages.

use std::time::Duration;

use {
    herald_notify::Error,
    reqwest::{Method, StatusCode, redirect},
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
    tracing::debug,
    url::Url,
};

use crate::config::ConnectionSettings;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const REDIRECT_LIMIT: usize = 10;

/// Normalized failure taxonomy for one API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The service rejected the request (HTTP 4xx). Carries the raw
    /// response body for operator diagnostics.
    #[error("request rejected (HTTP {status}): {body}")]
    Client { status: StatusCode, body: String },

    /// The host could not be reached (DNS, TLS, refused, timed out) or the
    /// configured domain does not form a valid address.
    #[error("connection failed: {detail}")]
    Connect { detail: String },

    /// The service itself failed (HTTP 5xx). Carries a dump of the
    /// outgoing request, with the bearer token redacted.
    #[error("server error (HTTP {status}), request was: {request}")]
    Server { status: StatusCode, request: String },

    /// The redirect-following limit was exceeded.
    #[error("too many redirects")]
    TooManyRedirects,
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Client { body, .. } => {
                Error::service(format!("An API error has occurred. Response: {body}"))
            },
            ApiError::Connect { .. } => Error::service(
                "A network error has occurred. Please check the domain name for correctness \
                 and verify that the Mattermost server is reachable.",
            ),
            ApiError::Server { request, .. } => Error::service(format!(
                "An error occurred on the Mattermost server or on the reverse proxy if used. \
                 Request: {request}"
            )),
            ApiError::TooManyRedirects => {
                Error::service("Too many redirects occurred while connecting to the API.")
            },
        }
    }
}

// ── Wire types ──────────────────────────────────────────────────────────────

/// Subset of the Mattermost user object the plugin relies on.
#[derive(Debug, Deserialize)]
pub struct User {
    pub id: String,
}

/// Subset of the Mattermost channel object returned by the membership list.
///
/// Direct-message conversations come back with an empty `display_name`.
#[derive(Debug, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub purpose: String,
}

/// Body for `POST posts`.
#[derive(Debug, Serialize)]
pub struct PostRequest {
    pub channel_id: String,
    pub message: String,
    pub props: PostProps,
}

#[derive(Debug, Serialize)]
pub struct PostProps {
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Serialize)]
pub struct Attachment {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    pub fields: Vec<AttachmentField>,
}

#[derive(Debug, Serialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
}

// ── Client ──────────────────────────────────────────────────────────────────

/// Bearer-authenticated client bound to one server's `/api/v4/` base.
#[derive(Debug)]
pub struct MattermostClient {
    http: reqwest::Client,
    base: Url,
    token: Secret<String>,
}

impl MattermostClient {
    /// Build a client for the configured domain. The base address is always
    /// `https://{domain}/api/v4/`; the settings carry a bare hostname.
    pub fn connect(settings: &ConnectionSettings) -> Result<Self, ApiError> {
        let base = Url::parse(&format!("https://{}/api/v4/", settings.domain)).map_err(|e| {
            ApiError::Connect {
                detail: format!("invalid domain {:?}: {e}", settings.domain),
            }
        })?;
        let http = reqwest::Client::builder()
            .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Connect {
                detail: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            http,
            base,
            token: settings.bot_token.clone(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_base(base: Url, token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
            token: Secret::new(token.to_string()),
        }
    }

    pub async fn get(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Issue one request and normalize the outcome.
    ///
    /// A single failed attempt is terminal; nothing is retried. Responses
    /// with a 2xx status are parsed as JSON; an unparseable success body is
    /// surfaced as [`ApiError::Client`] carrying the raw text.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.base.join(path).map_err(|e| ApiError::Connect {
            detail: format!("invalid request path {path:?}: {e}"),
        })?;

        let mut req = self
            .http
            .request(method.clone(), url.clone())
            .bearer_auth(self.token.expose_secret());
        if let Some(body) = body {
            req = req.json(body);
        }

        debug!(%method, %url, "mattermost api request");
        let resp = req.send().await.map_err(map_transport_error)?;

        let status = resp.status();
        if status.is_client_error() {
            let body = resp.text().await.unwrap_or_default();
            debug!(%status, "mattermost api rejected request");
            return Err(ApiError::Client { status, body });
        }
        if status.is_server_error() {
            return Err(ApiError::Server {
                status,
                request: dump_request(&method, &url, body.is_some()),
            });
        }

        let text = resp.text().await.map_err(map_transport_error)?;
        serde_json::from_str(&text).map_err(|_| ApiError::Client { status, body: text })
    }
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_redirect() {
        return ApiError::TooManyRedirects;
    }
    ApiError::Connect {
        detail: err.to_string(),
    }
}

/// Render the outgoing request for server-error diagnostics. The bearer
/// token never appears here.
fn dump_request(method: &Method, url: &Url, has_body: bool) -> String {
    let mut dump = format!("{method} {url}\nauthorization: Bearer [REDACTED]");
    if has_body {
        dump.push_str("\ncontent-type: application/json");
    }
    dump
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::Server) -> MattermostClient {
        MattermostClient::with_base(Url::parse(&server.url()).unwrap(), "test-token")
    }

    #[test]
    fn connect_derives_api_v4_base() {
        let settings = ConnectionSettings {
            domain: "chat.example.com".into(),
            bot_username: "whmcs".into(),
            bot_token: Secret::new("tok".into()),
        };
        let client = MattermostClient::connect(&settings).unwrap();
        assert_eq!(client.base.as_str(), "https://chat.example.com/api/v4/");
    }

    #[test]
    fn connect_rejects_unusable_domain() {
        let settings = ConnectionSettings {
            domain: "not a host".into(),
            bot_username: "whmcs".into(),
            bot_token: Secret::new("tok".into()),
        };
        let err = MattermostClient::connect(&settings).unwrap_err();
        assert!(matches!(err, ApiError::Connect { .. }));
    }

    #[tokio::test]
    async fn sends_bearer_authorization() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/username/whmcs")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"u1"}"#)
            .create_async()
            .await;

        let body = client_for(&server).get("users/username/whmcs").await.unwrap();
        assert_eq!(body["id"], "u1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn four_xx_maps_to_client_error_with_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/username/ghost")
            .with_status(404)
            .with_body(r#"{"message":"Unable to find the user."}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .get("users/username/ghost")
            .await
            .unwrap_err();
        match err {
            ApiError::Client { status, body } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert!(body.contains("Unable to find the user."));
            },
            other => panic!("expected Client, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn five_xx_maps_to_server_error_with_request_dump() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/posts")
            .with_status(503)
            .create_async()
            .await;

        let err = client_for(&server)
            .post("posts", &serde_json::json!({"channel_id": "c1"}))
            .await
            .unwrap_err();
        match err {
            ApiError::Server { status, request } => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                assert!(request.starts_with("POST"));
                assert!(request.contains("/posts"));
                assert!(request.contains("[REDACTED]"));
                assert!(!request.contains("test-token"));
            },
            other => panic!("expected Server, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_host_maps_to_connect_error() {
        // Nothing listens on this port.
        let client =
            MattermostClient::with_base(Url::parse("http://127.0.0.1:1/").unwrap(), "test-token");
        let err = client.get("users/username/whmcs").await.unwrap_err();
        assert!(matches!(err, ApiError::Connect { .. }));
    }

    #[tokio::test]
    async fn unparseable_success_body_maps_to_client_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/username/whmcs")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let err = client_for(&server)
            .get("users/username/whmcs")
            .await
            .unwrap_err();
        match err {
            ApiError::Client { body, .. } => assert!(body.contains("not json")),
            other => panic!("expected Client, got {other:?}"),
        }
    }

    #[test]
    fn user_facing_mapping_matches_taxonomy() {
        let cases = [
            (
                ApiError::Client {
                    status: StatusCode::FORBIDDEN,
                    body: "denied".into(),
                },
                "An API error has occurred. Response: denied",
            ),
            (
                ApiError::Connect {
                    detail: "dns failure".into(),
                },
                "A network error has occurred",
            ),
            (
                ApiError::Server {
                    status: StatusCode::BAD_GATEWAY,
                    request: "GET https://x/api/v4/posts".into(),
                },
                "reverse proxy",
            ),
            (ApiError::TooManyRedirects, "Too many redirects"),
        ];
        for (err, expected) in cases {
            let mapped: Error = err.into();
            assert!(
                mapped.to_string().contains(expected),
                "missing {expected:?} in {mapped}"
            );
        }
    }
}
