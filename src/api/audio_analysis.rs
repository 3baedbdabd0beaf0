//! Audio analysis of a single track.

use tracing::{debug, instrument};

use super::client::SpotifyClient;
use crate::error::{Result, SpotifyError};
use crate::models::{AudioAnalysis, SpotifyId};

impl SpotifyClient {
    /// Get the audio analysis of a track: loudness, tempo, key, pitch and
    /// timbre for its bars, beats, tatums, sections and segments.
    ///
    /// # Errors
    /// - `SpotifyError::InvalidParameter` - If the track ID is not base-62
    /// - `SpotifyError::Api` - If Spotify returns a non-success status
    #[instrument(skip(self, id), fields(track_id = %id))]
    pub async fn get_audio_analysis(&self, id: &SpotifyId) -> Result<AudioAnalysis> {
        if !id.is_base62() {
            return Err(SpotifyError::InvalidParameter(format!(
                "track ID must be a non-empty base-62 string, got {:?}",
                id.as_str()
            )));
        }

        let analysis: AudioAnalysis = self
            .get_api(&format!("audio-analysis/{}", id), &[])
            .await?;

        debug!(
            sections = analysis.sections.len(),
            segments = analysis.segments.len(),
            tempo = analysis.track.tempo,
            "Fetched audio analysis"
        );

        Ok(analysis)
    }
}
