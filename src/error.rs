//! Error types for the Spotify Web API client.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Main error type for all Spotify operations.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// A caller-supplied parameter is outside the range the API accepts.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// No access token was supplied.
    #[error("An access token is required for Spotify API access")]
    MissingToken,

    /// The API answered with a non-success status.
    #[error("Spotify API error {status}: {message}")]
    Api { status: u16, message: String },

    /// HTTP request failed.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SpotifyError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SpotifyError::Api { status, .. } => Some(*status),
            SpotifyError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the token was rejected or has expired.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED.as_u16())
    }

    /// True when the API asked us to slow down.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(StatusCode::TOO_MANY_REQUESTS.as_u16())
    }
}

/// Result type alias for Spotify operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;

/// Error envelope returned by the Web API.
///
/// Regular endpoints send `{"error": {"status": 401, "message": "..."}}`,
/// the accounts service sends `{"error": "invalid_grant", "error_description": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
    #[serde(default)]
    error_description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Regular {
        #[serde(default)]
        status: Option<u16>,
        #[serde(default)]
        message: String,
    },
    Code(String),
}

/// Turn a non-success response into a [`SpotifyError::Api`].
///
/// The upstream message is passed through as-is. If the body is not a
/// recognizable error object its raw text is used instead, and an empty
/// body falls back to the canonical reason of the status code.
pub(crate) fn decode_error(status: StatusCode, body: &str) -> SpotifyError {
    let fallback = || {
        let text = body.trim();
        if text.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unexpected HTTP status")
                .to_string()
        } else {
            text.to_string()
        }
    };

    let (status_code, message) = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope {
            error: ErrorBody::Regular { status: s, message },
            ..
        }) => {
            let message = if message.is_empty() { fallback() } else { message };
            (s.unwrap_or(status.as_u16()), message)
        }
        Ok(ErrorEnvelope {
            error: ErrorBody::Code(code),
            error_description,
        }) => {
            let message = match error_description {
                Some(desc) if !desc.is_empty() => format!("{}: {}", code, desc),
                _ => code,
            };
            (status.as_u16(), message)
        }
        Err(_) => (status.as_u16(), fallback()),
    };

    SpotifyError::Api {
        status: status_code,
        message,
    }
}
