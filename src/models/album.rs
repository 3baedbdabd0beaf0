//! Album-related models.

use serde::{Deserialize, Serialize};

use super::artist::ArtistInfo;
use super::common::{largest_image, ExternalUrls, Image, SpotifyId, SpotifyUri};

/// Simplified album, as nested inside a full track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AlbumInfo {
    /// Album type: "album", "single", or "compilation".
    #[serde(default)]
    pub album_type: String,

    /// Album artists.
    #[serde(default)]
    pub artists: Vec<ArtistInfo>,

    /// Known external URLs for this album.
    #[serde(default)]
    pub external_urls: ExternalUrls,

    /// Web API endpoint with full details of the album.
    #[serde(default)]
    pub href: String,

    /// Spotify ID of the album.
    pub id: SpotifyId,

    /// Cover art in various sizes.
    #[serde(default)]
    pub images: Vec<Image>,

    /// Album name.
    pub name: String,

    /// Release date, as precise as `release_date_precision` says.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    /// "year", "month" or "day".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date_precision: Option<String>,

    /// Number of tracks on the album.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tracks: Option<u32>,

    /// Object type, always `"album"`.
    #[serde(rename = "type", default)]
    pub type_: String,

    /// Spotify URI of the album.
    pub uri: SpotifyUri,
}

impl AlbumInfo {
    /// Get the largest cover available.
    pub fn largest_image(&self) -> Option<&Image> {
        largest_image(&self.images)
    }

    /// Release year, if a release date is present.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok())
    }
}
