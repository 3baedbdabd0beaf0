//! # Spotify Listening
//!
//! A Rust client for the Spotify Web API endpoints that describe what a
//! user listens to: recently played tracks, top tracks and artists, and
//! the audio analysis of individual tracks.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spotify_listening::{SpotifyClient, SpotifyId, TimeRange, TopItemsOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Token needs the user-read-recently-played and user-top-read scopes
//!     let client = SpotifyClient::new("your_access_token")?;
//!
//!     // Last 10 plays
//!     let history = client.current_user_recent_tracks(10).await?;
//!     for item in &history.items {
//!         println!("{} {}", item.played_at, item.track.name);
//!     }
//!
//!     // Favourite artists of the last 4 weeks
//!     let opts = TopItemsOptions::new().with_time_range(TimeRange::ShortTerm);
//!     let artists = client.current_user_top_artists(Some(&opts)).await?;
//!     println!("{} artists", artists.total);
//!
//!     // Tempo and key of a track
//!     let analysis = client
//!         .get_audio_analysis(&SpotifyId::new("3JIxjvbbDrA9ztYlNcp3yL"))
//!         .await?;
//!     println!("{} BPM", analysis.track.tempo);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Parameters are checked before any request is made and rejected with
//! [`SpotifyError::InvalidParameter`]. Any non-success HTTP status becomes
//! [`SpotifyError::Api`] carrying the upstream status and message.
//!
//! ## Environment Variables
//!
//! - `SPOTIFY_ACCESS_TOKEN`: OAuth access token used by [`SpotifyClient::from_env`]
//! - `SPOTIFY_API_BASE_URL`, `SPOTIFY_TIMEOUT_SECS`, `SPOTIFY_CONNECT_TIMEOUT_SECS`:
//!   see [`ClientConfig::from_env`]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod options;

pub use api::SpotifyClient;
pub use config::ClientConfig;
pub use error::{Result, SpotifyError};
pub use models::{
    AudioAnalysis, HistoryItem, PlayHistory, SpotifyId, SpotifyUri, TopArtists, TopTracks,
};
pub use options::{RecentlyPlayedOptions, TimeRange, TopItemsOptions};
