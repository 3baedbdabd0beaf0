//! Audio analysis models.
//!
//! An analysis splits a track into bars, beats, tatums, sections and
//! segments, each with a start time and duration in seconds and a
//! confidence between 0.0 and 1.0.

use serde::{Deserialize, Serialize};

/// Pitch class names indexed by the `key` field.
const PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

fn pitch_class(key: i32) -> Option<&'static str> {
    usize::try_from(key)
        .ok()
        .and_then(|k| PITCH_CLASSES.get(k))
        .copied()
}

/// Full audio analysis of a track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AudioAnalysis {
    /// Bars (measures).
    #[serde(default)]
    pub bars: Vec<TimeInterval>,

    /// Beats.
    #[serde(default)]
    pub beats: Vec<TimeInterval>,

    /// Metadata about the analysis run itself.
    pub meta: AnalysisMeta,

    /// Large sections defined by changes in rhythm or timbre.
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Short segments of roughly uniform sound.
    #[serde(default)]
    pub segments: Vec<Segment>,

    /// Tatums, the lowest regular pulse of the track.
    #[serde(default)]
    pub tatums: Vec<TimeInterval>,

    /// Track-wide figures.
    pub track: TrackAnalysis,
}

impl AudioAnalysis {
    /// Section playing at `seconds`, if any.
    pub fn section_at(&self, seconds: f64) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| seconds >= s.start && seconds < s.start + s.duration)
    }

    /// Beats starting inside `[start, end)`.
    pub fn beats_in(&self, start: f64, end: f64) -> impl Iterator<Item = &TimeInterval> {
        self.beats
            .iter()
            .filter(move |b| b.start >= start && b.start < end)
    }
}

/// Position and duration of a bar, beat or tatum.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TimeInterval {
    pub start: f64,
    pub duration: f64,
    pub confidence: f64,
}

impl TimeInterval {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Metadata on the analysis process.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisMeta {
    #[serde(default)]
    pub analyzer_version: String,

    #[serde(default)]
    pub platform: String,

    /// Detailed status of the analysis, usually "OK".
    #[serde(default)]
    pub detailed_status: String,

    /// 0 on success.
    #[serde(default)]
    pub status_code: i32,

    /// Unix time (seconds) the analysis was run.
    #[serde(default)]
    pub timestamp: i64,

    /// Time taken to analyse the track, in seconds.
    #[serde(default)]
    pub analysis_time: f64,

    /// How the input was provided, e.g. "libvorbisfile L+R 44100->22050".
    #[serde(default)]
    pub input_process: String,
}

/// A section of the track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub start: f64,
    pub duration: f64,
    pub confidence: f64,

    /// Average loudness in dB.
    pub loudness: f64,

    /// Estimated tempo in BPM.
    pub tempo: f64,
    pub tempo_confidence: f64,

    /// Pitch class, -1 when no key was detected.
    pub key: i32,
    pub key_confidence: f64,

    /// 1 for major, 0 for minor, -1 when undetected.
    pub mode: i32,
    pub mode_confidence: f64,

    /// Beats per bar, 3 to 7.
    pub time_signature: i32,
    pub time_signature_confidence: f64,
}

impl Section {
    pub fn key_name(&self) -> Option<&'static str> {
        pitch_class(self.key)
    }

    pub fn is_major(&self) -> bool {
        self.mode == 1
    }
}

/// A short segment of roughly uniform sound.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub duration: f64,
    pub confidence: f64,

    /// Onset loudness in dB.
    pub loudness_start: f64,

    /// Offset within the segment of the peak loudness, in seconds.
    pub loudness_max_time: f64,

    /// Peak loudness in dB.
    pub loudness_max: f64,

    /// Offset loudness in dB. Only set on the last segment.
    #[serde(default)]
    pub loudness_end: f64,

    /// Relative dominance of the 12 pitch classes.
    #[serde(default)]
    pub pitches: Vec<f64>,

    /// 12 timbre coefficients.
    #[serde(default)]
    pub timbre: Vec<f64>,
}

impl Segment {
    /// Name of the most dominant pitch class.
    pub fn dominant_pitch(&self) -> Option<&'static str> {
        self.pitches
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .and_then(|(idx, _)| PITCH_CLASSES.get(idx).copied())
    }
}

/// Track-wide analysis figures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrackAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_samples: Option<u64>,

    /// Track length in seconds.
    pub duration: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_md5: Option<String>,

    #[serde(default)]
    pub offset_seconds: f64,

    #[serde(default)]
    pub window_seconds: f64,

    #[serde(default)]
    pub analysis_sample_rate: u32,

    #[serde(default)]
    pub analysis_channels: u32,

    /// End of the fade-in, in seconds.
    #[serde(default)]
    pub end_of_fade_in: f64,

    /// Start of the fade-out, in seconds.
    #[serde(default)]
    pub start_of_fade_out: f64,

    pub loudness: f64,
    pub tempo: f64,
    #[serde(default)]
    pub tempo_confidence: f64,
    pub time_signature: i32,
    #[serde(default)]
    pub time_signature_confidence: f64,
    pub key: i32,
    #[serde(default)]
    pub key_confidence: f64,
    pub mode: i32,
    #[serde(default)]
    pub mode_confidence: f64,

    // Fingerprint and synchronization strings with their format versions.
    #[serde(default)]
    pub codestring: String,
    #[serde(default)]
    pub code_version: f64,
    #[serde(default)]
    pub echoprintstring: String,
    #[serde(default)]
    pub echoprint_version: f64,
    #[serde(default)]
    pub synchstring: String,
    #[serde(default)]
    pub synch_version: f64,
    #[serde(default)]
    pub rhythmstring: String,
    #[serde(default)]
    pub rhythm_version: f64,
}

impl TrackAnalysis {
    /// Pitch class of the track key, `None` when undetected.
    pub fn key_name(&self) -> Option<&'static str> {
        pitch_class(self.key)
    }

    pub fn is_major(&self) -> bool {
        self.mode == 1
    }

    /// Key and mode, e.g. "F# minor".
    pub fn key_signature(&self) -> Option<String> {
        let key = self.key_name()?;
        let mode = match self.mode {
            1 => "major",
            0 => "minor",
            _ => return Some(key.to_string()),
        };
        Some(format!("{} {}", key, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(start: f64, duration: f64, key: i32, mode: i32) -> Section {
        Section {
            start,
            duration,
            key,
            mode,
            ..Default::default()
        }
    }

    #[test]
    fn test_key_names() {
        let track = TrackAnalysis {
            key: 6,
            mode: 0,
            ..Default::default()
        };
        assert_eq!(track.key_name(), Some("F#"));
        assert!(!track.is_major());
        assert_eq!(track.key_signature().as_deref(), Some("F# minor"));
    }

    #[test]
    fn test_undetected_key() {
        let track = TrackAnalysis {
            key: -1,
            mode: -1,
            ..Default::default()
        };
        assert_eq!(track.key_name(), None);
        assert_eq!(track.key_signature(), None);
        assert_eq!(section(0.0, 1.0, 12, 1).key_name(), None);
    }

    #[test]
    fn test_section_at() {
        let analysis = AudioAnalysis {
            sections: vec![section(0.0, 10.5, 0, 1), section(10.5, 20.0, 7, 0)],
            ..Default::default()
        };
        assert_eq!(analysis.section_at(3.0).map(|s| s.key), Some(0));
        assert_eq!(analysis.section_at(10.5).map(|s| s.key), Some(7));
        assert!(analysis.section_at(40.0).is_none());
    }

    #[test]
    fn test_beats_in() {
        let analysis = AudioAnalysis {
            beats: (0..8)
                .map(|i| TimeInterval {
                    start: f64::from(i) * 0.5,
                    duration: 0.5,
                    confidence: 0.8,
                })
                .collect(),
            ..Default::default()
        };
        let beats: Vec<_> = analysis.beats_in(1.0, 2.0).collect();
        assert_eq!(beats.len(), 2);
        assert_eq!(beats[0].start, 1.0);
        assert_eq!(beats[1].end(), 2.0);
    }

    #[test]
    fn test_dominant_pitch() {
        let segment = Segment {
            pitches: vec![
                0.1, 0.2, 0.9, 0.1, 0.0, 0.0, 0.0, 0.3, 0.0, 0.0, 0.0, 0.05,
            ],
            ..Default::default()
        };
        assert_eq!(segment.dominant_pitch(), Some("D"));
        assert_eq!(Segment::default().dominant_pitch(), None);
    }
}
