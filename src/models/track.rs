//! Track-related models.
//!
//! The API uses a simplified track object inside listening history and a
//! full track object (with album and popularity) in top tracks.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::album::AlbumInfo;
use super::artist::ArtistInfo;
use super::common::{ExternalUrls, SpotifyId, SpotifyUri};

fn join_artists(artists: &[ArtistInfo], separator: &str) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Simplified track, as found in play history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SimpleTrack {
    /// Artists who performed the track.
    #[serde(default)]
    pub artists: Vec<ArtistInfo>,

    /// ISO 3166-1 alpha-2 codes of markets the track is available in.
    #[serde(default)]
    pub available_markets: Vec<String>,

    /// Disc number (usually 1).
    #[serde(default)]
    pub disc_number: u32,

    /// Track length in milliseconds.
    pub duration_ms: u64,

    /// Whether the track has explicit lyrics.
    #[serde(default)]
    pub explicit: bool,

    /// Known external URLs for this track.
    #[serde(default)]
    pub external_urls: ExternalUrls,

    /// Web API endpoint with full details of the track.
    #[serde(default)]
    pub href: String,

    /// Spotify ID of the track.
    pub id: SpotifyId,

    /// Track name.
    pub name: String,

    /// 30 second preview, if one exists.
    #[serde(default)]
    pub preview_url: Option<String>,

    /// Position on its disc.
    #[serde(default)]
    pub track_number: u32,

    /// Object type, always `"track"`.
    #[serde(rename = "type", default)]
    pub type_: String,

    /// Spotify URI of the track.
    pub uri: SpotifyUri,
}

impl SimpleTrack {
    /// Get all artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        join_artists(&self.artists, separator)
    }

    /// Track length.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Full track, as found in top tracks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrackItem {
    /// Album the track appears on.
    pub album: AlbumInfo,

    /// Artists who performed the track.
    #[serde(default)]
    pub artists: Vec<ArtistInfo>,

    /// Disc number (usually 1).
    #[serde(default)]
    pub disc_number: u32,

    /// Track length in milliseconds.
    pub duration_ms: u64,

    /// Whether the track has explicit lyrics.
    #[serde(default)]
    pub explicit: bool,

    /// Known external IDs (`isrc`, `ean`, `upc`).
    #[serde(default)]
    pub external_ids: ExternalUrls,

    /// Known external URLs for this track.
    #[serde(default)]
    pub external_urls: ExternalUrls,

    /// Web API endpoint with full details of the track.
    #[serde(default)]
    pub href: String,

    /// Spotify ID of the track.
    pub id: SpotifyId,

    /// Only present when track relinking was applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_playable: Option<bool>,

    /// Track name.
    pub name: String,

    /// Popularity between 0 and 100.
    #[serde(default)]
    pub popularity: u32,

    /// 30 second preview, if one exists.
    #[serde(default)]
    pub preview_url: Option<String>,

    /// Position on its disc.
    #[serde(default)]
    pub track_number: u32,

    /// Object type, always `"track"`.
    #[serde(rename = "type", default)]
    pub type_: String,

    /// Spotify URI of the track.
    pub uri: SpotifyUri,
}

impl TrackItem {
    /// Get all artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        join_artists(&self.artists, separator)
    }

    /// Track length.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// International Standard Recording Code, when known.
    pub fn isrc(&self) -> Option<&str> {
        self.external_ids.get("isrc").map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn artist(name: &str) -> ArtistInfo {
        ArtistInfo {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_artists_string() {
        let track = SimpleTrack {
            artists: vec![artist("Daft Punk"), artist("Pharrell Williams")],
            ..Default::default()
        };
        assert_eq!(track.artists_string(" & "), "Daft Punk & Pharrell Williams");
    }

    #[test]
    fn test_duration() {
        let track = TrackItem {
            duration_ms: 207_959,
            ..Default::default()
        };
        assert_eq!(track.duration(), Duration::from_millis(207_959));
        assert_eq!(track.duration().as_secs(), 207);
    }

    #[test]
    fn test_null_preview_url() {
        let track: SimpleTrack = serde_json::from_value(json!({
            "artists": [],
            "duration_ms": 1000,
            "id": "abc",
            "name": "Quiet",
            "preview_url": null,
            "uri": "spotify:track:abc"
        }))
        .unwrap();
        assert_eq!(track.preview_url, None);
        assert_eq!(track.disc_number, 0);
    }

    #[test]
    fn test_isrc() {
        let mut track = TrackItem::default();
        track
            .external_ids
            .insert("isrc".to_string(), "USUM71703861".to_string());
        assert_eq!(track.isrc(), Some("USUM71703861"));
    }
}
