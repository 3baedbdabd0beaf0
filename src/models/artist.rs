//! Artist-related models.

use serde::{Deserialize, Serialize};

use super::common::{largest_image, ExternalUrls, Followers, Image, SpotifyId, SpotifyUri};

/// Simplified artist, as nested inside tracks and albums.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtistInfo {
    /// Known external URLs for this artist.
    #[serde(default)]
    pub external_urls: ExternalUrls,

    /// Web API endpoint with full details of the artist.
    #[serde(default)]
    pub href: String,

    /// Spotify ID of the artist.
    pub id: SpotifyId,

    /// Artist name.
    pub name: String,

    /// Object type, always `"artist"`.
    #[serde(rename = "type", default)]
    pub type_: String,

    /// Spotify URI of the artist.
    pub uri: SpotifyUri,
}

/// Full artist record, as returned by the top artists endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtistItem {
    /// Known external URLs for this artist.
    #[serde(default)]
    pub external_urls: ExternalUrls,

    /// Follower information.
    #[serde(default)]
    pub followers: Followers,

    /// Genres associated with the artist.
    #[serde(default)]
    pub genres: Vec<String>,

    /// Web API endpoint with full details of the artist.
    #[serde(default)]
    pub href: String,

    /// Spotify ID of the artist.
    pub id: SpotifyId,

    /// Artist images in various sizes.
    #[serde(default)]
    pub images: Vec<Image>,

    /// Artist name.
    pub name: String,

    /// Popularity between 0 and 100.
    #[serde(default)]
    pub popularity: u32,

    /// Object type, always `"artist"`.
    #[serde(rename = "type", default)]
    pub type_: String,

    /// Spotify URI of the artist.
    pub uri: SpotifyUri,
}

impl ArtistItem {
    /// Get the largest image available.
    pub fn largest_image(&self) -> Option<&Image> {
        largest_image(&self.images)
    }

    /// Genres joined by a separator.
    pub fn genres_string(&self, separator: &str) -> String {
        self.genres.join(separator)
    }
}
