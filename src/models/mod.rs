//! Data models for Spotify Web API responses.
//!
//! Field names follow the upstream JSON schema verbatim so responses can
//! be decoded and re-encoded without loss.

pub mod album;
pub mod artist;
pub mod audio_analysis;
pub mod common;
pub mod history;
pub mod paging;
pub mod track;

// Re-exports for convenience
pub use album::AlbumInfo;
pub use artist::{ArtistInfo, ArtistItem};
pub use audio_analysis::{AnalysisMeta, AudioAnalysis, Section, Segment, TimeInterval, TrackAnalysis};
pub use common::{ExternalUrls, Followers, Image, SpotifyId, SpotifyUri};
pub use history::{Cursors, HistoryItem, PlayHistory, TrackContext};
pub use paging::{Page, TopArtists, TopTracks};
pub use track::{SimpleTrack, TrackItem};
