//! Authenticated Spotify Web API client.
//!
//! Every operation is a single GET: build the URL, send it with the bearer
//! token, reject non-success statuses, decode the JSON body.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::error::{decode_error, Result, SpotifyError};
use crate::models::{Page, PlayHistory};

/// Spotify Web API client.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use spotify_listening::{SpotifyClient, TimeRange, TopItemsOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SpotifyClient::new("your_access_token")?;
///     let opts = TopItemsOptions::new().with_limit(5).with_time_range(TimeRange::ShortTerm);
///     let top = client.current_user_top_tracks(Some(&opts)).await?;
///     for track in &top.items {
///         println!("{} - {}", track.artists_string(", "), track.name);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    config: ClientConfig,
    access_token: Option<String>,
}

impl fmt::Debug for SpotifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyClient")
            .field("base_url", &self.config.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl SpotifyClient {
    /// Create a client for the public API with an OAuth access token.
    ///
    /// # Errors
    /// Returns `SpotifyError::MissingToken` if the token is empty.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(access_token, ClientConfig::default())
    }

    /// Create a client with an access token and custom settings.
    pub fn with_config(access_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(SpotifyError::MissingToken);
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            config,
            access_token: Some(access_token),
        })
    }

    /// Create a client from environment variables.
    ///
    /// Reads `SPOTIFY_ACCESS_TOKEN` and everything [`ClientConfig::from_env`] reads.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("SPOTIFY_ACCESS_TOKEN").map_err(|_| SpotifyError::MissingToken)?;
        Self::with_config(token, ClientConfig::from_env()?)
    }

    /// Wrap an HTTP client that already authorizes its requests.
    ///
    /// No `Authorization` header is added; the given client is expected to
    /// carry one (e.g. through its default headers).
    pub fn from_http_client(http: Client, config: ClientConfig) -> Self {
        Self {
            http,
            config,
            access_token: None,
        }
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET an endpoint relative to the API base URL and decode the body.
    pub(crate) async fn get_api<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = self.config.endpoint_url(endpoint);
        self.get_url(&url, params).await
    }

    async fn get_url<T: DeserializeOwned>(&self, url: &str, params: &[(&str, String)]) -> Result<T> {
        debug!("GET {} with params: {:?}", url, params);

        let mut request = self.http.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = decode_error(status, &body);
            error!(status = status.as_u16(), url, "Spotify API error: {}", err);
            return Err(err);
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Follow a `next` link returned by the API.
    ///
    /// The token is only ever sent to the configured API host, so links
    /// pointing elsewhere are rejected.
    async fn follow<T: DeserializeOwned>(&self, next: Option<&str>) -> Result<Option<T>> {
        let Some(url) = next.filter(|n| !n.is_empty()) else {
            return Ok(None);
        };

        if !self.is_api_url(url)? {
            return Err(SpotifyError::InvalidParameter(format!(
                "next link {} is outside {}",
                url, self.config.base_url
            )));
        }

        self.get_url(url, &[]).await.map(Some)
    }

    /// Whether `url` has the scheme, host and port of the base URL and
    /// lives under its path.
    fn is_api_url(&self, url: &str) -> Result<bool> {
        let base = Url::parse(&self.config.base_url).map_err(|e| {
            SpotifyError::Config(format!("invalid base URL {}: {}", self.config.base_url, e))
        })?;
        let Ok(link) = Url::parse(url) else {
            return Ok(false);
        };

        if link.scheme() != base.scheme()
            || link.host_str() != base.host_str()
            || link.port_or_known_default() != base.port_or_known_default()
        {
            return Ok(false);
        }

        let base_path = base.path().trim_end_matches('/');
        let path = link.path();
        Ok(base_path.is_empty()
            || path == base_path
            || path
                .strip_prefix(base_path)
                .is_some_and(|rest| rest.starts_with('/')))
    }

    /// Fetch the page after `page`, or `None` on the last page.
    pub async fn next_page<T: DeserializeOwned>(&self, page: &Page<T>) -> Result<Option<Page<T>>> {
        self.follow(page.next.as_deref()).await
    }

    /// Fetch older plays after `history`, or `None` when there are none.
    pub async fn next_history(&self, history: &PlayHistory) -> Result<Option<PlayHistory>> {
        self.follow(history.next.as_deref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TopArtists;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn page_json(server_uri: &str, offset: u32, next: Option<String>) -> serde_json::Value {
        json!({
            "href": format!("{}/me/top/artists?offset={}", server_uri, offset),
            "items": [],
            "limit": 20,
            "next": next,
            "offset": offset,
            "previous": null,
            "total": 40
        })
    }

    #[test]
    fn test_client_requires_token() {
        assert!(matches!(
            SpotifyClient::new(""),
            Err(SpotifyError::MissingToken)
        ));
        assert!(matches!(
            SpotifyClient::new("   "),
            Err(SpotifyError::MissingToken)
        ));
    }

    #[test]
    fn test_client_debug_redacts_token() {
        let client = SpotifyClient::new("secret_token").unwrap();
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("secret_token"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn test_bearer_token_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me/top/artists"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&server.uri(), 0, None)))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            SpotifyClient::with_config("test-token", ClientConfig::with_base_url(server.uri()))
                .unwrap();
        let page: TopArtists = client.get_api("me/top/artists", &[]).await.unwrap();
        assert_eq!(page.total, 40);
    }

    #[tokio::test]
    async fn test_external_http_client_supplies_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me/top/artists"))
            .and(header("authorization", "Bearer from-outside"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&server.uri(), 0, None)))
            .expect(1)
            .mount(&server)
            .await;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            reqwest::header::HeaderValue::from_static("Bearer from-outside"),
        );
        let http = Client::builder().default_headers(headers).build().unwrap();
        let client = SpotifyClient::from_http_client(http, ClientConfig::with_base_url(server.uri()));

        let page: TopArtists = client.get_api("me/top/artists", &[]).await.unwrap();
        assert_eq!(page.limit, 20);
    }

    #[tokio::test]
    async fn test_next_page_follows_link() {
        let server = MockServer::start().await;
        let next = format!("{}/me/top/artists?offset=20&limit=20", server.uri());

        Mock::given(method("GET"))
            .and(path("/me/top/artists"))
            .and(query_param("offset", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&server.uri(), 20, None)))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            SpotifyClient::with_config("test-token", ClientConfig::with_base_url(server.uri()))
                .unwrap();
        let first: TopArtists =
            serde_json::from_value(page_json(&server.uri(), 0, Some(next))).unwrap();

        let second = client.next_page(&first).await.unwrap().unwrap();
        assert_eq!(second.offset, 20);
        assert!(client.next_page(&second).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_next_history_follows_link() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me/player/recently-played"))
            .and(query_param("before", "1481661737016"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [],
                "next": null,
                "cursors": null,
                "limit": 20,
                "href": format!("{}/me/player/recently-played?before=1481661737016", server.uri())
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            SpotifyClient::with_config("test-token", ClientConfig::with_base_url(server.uri()))
                .unwrap();
        let history = PlayHistory {
            next: Some(format!(
                "{}/me/player/recently-played?before=1481661737016&limit=20",
                server.uri()
            )),
            ..Default::default()
        };

        let older = client.next_history(&history).await.unwrap().unwrap();
        assert!(older.items.is_empty());
        assert!(client.next_history(&older).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_next_page_rejects_foreign_host() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client =
            SpotifyClient::with_config("test-token", ClientConfig::with_base_url(server.uri()))
                .unwrap();
        let page: TopArtists = serde_json::from_value(page_json(
            &server.uri(),
            0,
            Some("https://evil.example.com/me/top/artists?offset=20".to_string()),
        ))
        .unwrap();

        let err = client.next_page(&page).await.unwrap_err();
        assert!(matches!(err, SpotifyError::InvalidParameter(_)));
    }

    #[tokio::test]
    async fn test_next_page_rejects_host_with_base_as_prefix() {
        let client =
            SpotifyClient::with_config("test-token", ClientConfig::with_base_url("http://api.example.com"))
                .unwrap();
        let page: TopArtists = serde_json::from_value(page_json(
            "http://api.example.com",
            0,
            Some("http://api.example.com.invalid/steal?offset=20".to_string()),
        ))
        .unwrap();

        let err = client.next_page(&page).await.unwrap_err();
        assert!(matches!(err, SpotifyError::InvalidParameter(_)));
    }

    #[test]
    fn test_is_api_url() {
        let client = SpotifyClient::new("test-token").unwrap();
        assert!(client
            .is_api_url("https://api.spotify.com/v1/me/top/tracks?offset=20")
            .unwrap());
        assert!(client
            .is_api_url("https://api.spotify.com:443/v1/me/player/recently-played")
            .unwrap());
        assert!(!client
            .is_api_url("https://api.spotify.com.evil.net/v1/me/top/tracks")
            .unwrap());
        assert!(!client
            .is_api_url("http://api.spotify.com/v1/me/top/tracks")
            .unwrap());
        assert!(!client
            .is_api_url("https://api.spotify.com:8443/v1/me/top/tracks")
            .unwrap());
        assert!(!client
            .is_api_url("https://api.spotify.com/v10/me/top/tracks")
            .unwrap());
        assert!(!client.is_api_url("not a url").unwrap());
    }

    #[tokio::test]
    async fn test_success_body_that_is_not_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me/top/artists"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let client =
            SpotifyClient::with_config("test-token", ClientConfig::with_base_url(server.uri()))
                .unwrap();
        let result: Result<TopArtists> = client.get_api("me/top/artists", &[]).await;
        assert!(matches!(result, Err(SpotifyError::Parse(_))));
    }
}
