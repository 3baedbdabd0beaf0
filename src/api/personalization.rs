//! Listening history and top items of the current user.

use tracing::{debug, instrument};

use super::client::SpotifyClient;
use crate::error::Result;
use crate::models::{PlayHistory, TopArtists, TopTracks};
use crate::options::{RecentlyPlayedOptions, TopItemsOptions};

impl SpotifyClient {
    /// Get the user's `total` most recently played tracks.
    ///
    /// Only the 50 most recent plays are available, and `total` must be
    /// between 1 and 50. Requires the `user-read-recently-played` scope.
    ///
    /// # Errors
    /// - `SpotifyError::InvalidParameter` - If `total` is out of range
    /// - `SpotifyError::Api` - If Spotify returns a non-success status
    #[instrument(skip(self))]
    pub async fn current_user_recent_tracks(&self, total: u32) -> Result<PlayHistory> {
        self.current_user_recent_tracks_opt(&RecentlyPlayedOptions::new().with_limit(total))
            .await
    }

    /// Get recently played tracks with cursor options.
    ///
    /// # Errors
    /// - `SpotifyError::InvalidParameter` - If the limit is out of range or
    ///   both `after` and `before` are set
    /// - `SpotifyError::Api` - If Spotify returns a non-success status
    #[instrument(skip(self))]
    pub async fn current_user_recent_tracks_opt(
        &self,
        options: &RecentlyPlayedOptions,
    ) -> Result<PlayHistory> {
        let params = options.query_params()?;
        let history: PlayHistory = self.get_api("me/player/recently-played", &params).await?;
        debug!(result_count = history.items.len(), "Fetched recently played tracks");
        Ok(history)
    }

    /// Get the user's top tracks.
    ///
    /// Requires the `user-top-read` scope.
    ///
    /// # Errors
    /// - `SpotifyError::InvalidParameter` - If the limit is out of range
    /// - `SpotifyError::Api` - If Spotify returns a non-success status
    #[instrument(skip(self))]
    pub async fn current_user_top_tracks(
        &self,
        options: Option<&TopItemsOptions>,
    ) -> Result<TopTracks> {
        let params = options.map(TopItemsOptions::query_params).transpose()?;
        let tracks: TopTracks = self
            .get_api("me/top/tracks", params.as_deref().unwrap_or_default())
            .await?;
        debug!(
            result_count = tracks.items.len(),
            total = tracks.total,
            "Fetched top tracks"
        );
        Ok(tracks)
    }

    /// Get the user's top artists.
    ///
    /// Requires the `user-top-read` scope.
    ///
    /// # Errors
    /// - `SpotifyError::InvalidParameter` - If the limit is out of range
    /// - `SpotifyError::Api` - If Spotify returns a non-success status
    #[instrument(skip(self))]
    pub async fn current_user_top_artists(
        &self,
        options: Option<&TopItemsOptions>,
    ) -> Result<TopArtists> {
        let params = options.map(TopItemsOptions::query_params).transpose()?;
        let artists: TopArtists = self
            .get_api("me/top/artists", params.as_deref().unwrap_or_default())
            .await?;
        debug!(
            result_count = artists.items.len(),
            total = artists.total,
            "Fetched top artists"
        );
        Ok(artists)
    }
}
