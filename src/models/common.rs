//! Common types shared across all models.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// External URLs or IDs keyed by provider (`"spotify"`, `"isrc"`, ...).
pub type ExternalUrls = HashMap<String, String>;

/// Base-62 Spotify identifier of a track, album, artist or playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotifyId(pub String);

impl SpotifyId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// True for a non-empty base-62 string, the only form the API issues.
    pub fn is_base62(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_alphanumeric())
    }
}

impl fmt::Display for SpotifyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpotifyId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SpotifyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Spotify URI such as `spotify:track:6rqhFgbbKwnb9MLmUQDhG6`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotifyUri(pub String);

impl SpotifyUri {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resource kind (`track`, `artist`, `playlist`, ...).
    pub fn kind(&self) -> Option<&str> {
        let mut parts = self.0.split(':');
        match (parts.next(), parts.next()) {
            (Some("spotify"), Some(kind)) if !kind.is_empty() => Some(kind),
            _ => None,
        }
    }

    /// Trailing identifier of the URI.
    pub fn id(&self) -> Option<SpotifyId> {
        self.kind()?;
        self.0
            .rsplit(':')
            .next()
            .filter(|id| !id.is_empty())
            .map(SpotifyId::from)
    }
}

impl fmt::Display for SpotifyUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Image with URL and (optional) dimensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// URL to the image.
    pub url: String,

    /// Height in pixels, when known.
    #[serde(default)]
    pub height: Option<u32>,

    /// Width in pixels, when known.
    #[serde(default)]
    pub width: Option<u32>,
}

impl Image {
    fn area(&self) -> u64 {
        u64::from(self.height.unwrap_or(0)) * u64::from(self.width.unwrap_or(0))
    }
}

/// Get the largest image of a set.
pub(crate) fn largest_image(images: &[Image]) -> Option<&Image> {
    images.iter().max_by_key(|img| img.area())
}

/// Follower information for an artist or user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Followers {
    /// Always null in current API responses.
    #[serde(default)]
    pub href: Option<String>,

    /// Total number of followers.
    pub total: u32,
}
