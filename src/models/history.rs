//! Listening history models.

use serde::{Deserialize, Serialize};

use super::common::{ExternalUrls, SpotifyUri};
use super::track::SimpleTrack;

/// The user's recently played tracks, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlayHistory {
    /// Played tracks with timestamps.
    #[serde(default)]
    pub items: Vec<HistoryItem>,

    /// URL of the next (older) page, if there is one.
    #[serde(default)]
    pub next: Option<String>,

    /// Cursors for the `after`/`before` parameters.
    #[serde(default)]
    pub cursors: Option<Cursors>,

    /// Maximum number of items requested.
    pub limit: u32,

    /// Link to the Web API endpoint returning this page.
    pub href: String,

    /// Total number of items, when the API reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
}

impl PlayHistory {
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Cursor to pass as `before` to fetch older plays.
    pub fn before_cursor(&self) -> Option<i64> {
        self.cursors
            .as_ref()
            .and_then(|c| c.before.as_deref())
            .and_then(|b| b.parse().ok())
    }

    /// Cursor to pass as `after` to fetch newer plays.
    pub fn after_cursor(&self) -> Option<i64> {
        self.cursors
            .as_ref()
            .and_then(|c| c.after.as_deref())
            .and_then(|a| a.parse().ok())
    }
}

/// Cursor pair (unix milliseconds, sent as strings).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cursors {
    #[serde(default)]
    pub after: Option<String>,

    #[serde(default)]
    pub before: Option<String>,
}

/// A single play.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoryItem {
    /// The track that was played.
    pub track: SimpleTrack,

    /// ISO 8601 UTC timestamp of the play.
    pub played_at: String,

    /// What the track was played from; null when there was no context.
    #[serde(default)]
    pub context: Option<TrackContext>,
}

/// Playlist, album or artist the track was played from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrackContext {
    /// "artist", "playlist", "album" or "show".
    #[serde(rename = "type")]
    pub type_: String,

    /// Web API endpoint with full details of the context.
    #[serde(default)]
    pub href: String,

    /// Known external URLs for the context.
    #[serde(default)]
    pub external_urls: ExternalUrls,

    /// Spotify URI of the context.
    pub uri: SpotifyUri,
}
