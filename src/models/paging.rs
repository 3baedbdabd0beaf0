//! Offset-based paging wrapper.

use serde::{Deserialize, Serialize};

use super::artist::ArtistItem;
use super::track::TrackItem;

/// One page of an offset-paged listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// Link to the Web API endpoint returning this page.
    pub href: String,

    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,

    /// Maximum number of items requested.
    pub limit: u32,

    /// URL of the next page, if there is one.
    #[serde(default)]
    pub next: Option<String>,

    /// Offset of the first item on this page.
    pub offset: u32,

    /// URL of the previous page, if there is one.
    #[serde(default)]
    pub previous: Option<String>,

    /// Total number of items available.
    pub total: u32,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }

    pub fn has_previous(&self) -> bool {
        self.previous.as_deref().is_some_and(|p| !p.is_empty())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The user's top tracks.
pub type TopTracks = Page<TrackItem>;

/// The user's top artists.
pub type TopArtists = Page<ArtistItem>;
