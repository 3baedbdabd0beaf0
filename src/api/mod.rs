//! Spotify Web API client.
//!
//! [`SpotifyClient`] owns the transport; the endpoint groups add their
//! operations to it:
//! - [`personalization`]: recently played tracks, top tracks and artists
//! - [`audio_analysis`]: per-track audio analysis

pub mod audio_analysis;
pub mod client;
pub mod personalization;

pub use client::SpotifyClient;
