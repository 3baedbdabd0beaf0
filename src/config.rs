//! Client configuration.

use std::str::FromStr;

use crate::error::{Result, SpotifyError};

/// Base URL for the Spotify Web API.
pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1/";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP client settings for [`SpotifyClient`](crate::SpotifyClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root every endpoint path is joined onto.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,

    /// User agent sent with each request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: concat!("spotify-listening/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// - `SPOTIFY_API_BASE_URL` (default: `https://api.spotify.com/v1/`)
    /// - `SPOTIFY_TIMEOUT_SECS` (default: 30)
    /// - `SPOTIFY_CONNECT_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            base_url: std::env::var("SPOTIFY_API_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.base_url),
            timeout_secs: parse_env("SPOTIFY_TIMEOUT_SECS", defaults.timeout_secs)?,
            connect_timeout_secs: parse_env(
                "SPOTIFY_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            user_agent: defaults.user_agent,
        })
    }

    /// Create a configuration with a custom base URL (useful for testing).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL for an endpoint path such as `me/top/tracks`.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_env<T: FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(default),
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| SpotifyError::Config(format!("invalid value for {}: {}", key, raw))),
        Err(_) => Ok(default),
    }
}
