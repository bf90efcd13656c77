//! Probe track records and the canonical attribute schema.

use serde::{Deserialize, Serialize};
use tf_core::UNKNOWN;

/// One probed stream descriptor, tagged by track kind.
///
/// Fields are stringly typed on purpose: probe output varies wildly across
/// containers and tool versions, and the normalization pass is where
/// defaults get applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TrackRecord {
    General(GeneralTrack),
    Video(VideoTrack),
    Audio(AudioTrack),
    Subtitle(SubtitleTrack),
}

/// Container-level track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralTrack {
    /// Container format name.
    pub format: Option<String>,
    /// Duration in seconds, possibly fractional.
    pub duration: Option<String>,
    /// Overall bitrate in bits per second.
    pub overall_bitrate: Option<String>,
    /// Embedded container title, when the muxer set one.
    pub title: Option<String>,
}

/// Video stream track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoTrack {
    pub format: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

/// Audio stream track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioTrack {
    pub format: Option<String>,
    pub channels: Option<String>,
    pub language: Option<String>,
}

/// Subtitle (text) stream track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubtitleTrack {
    pub format: Option<String>,
    pub language: Option<String>,
}

/// Canonical attributes derived from one probed file.
///
/// Scalar fields default to `"Unknown"` and list fields to empty, so
/// building one from any track sequence (including an empty one) cannot
/// fail. Immutable after the normalization pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAttributes {
    /// Container format name.
    pub format: String,
    /// Duration in seconds, verbatim from the probe.
    pub duration: String,
    /// Overall bitrate in bits per second, verbatim from the probe.
    pub overall_bitrate: String,
    /// Friendly codec label ("HEVC (H.265)", "AVC (H.264)") or the raw
    /// format name.
    pub video_codec: String,
    /// Resolution tier: "4K", "1080p", "720p" or "<height>p".
    pub resolution: String,
    pub width: String,
    pub height: String,
    /// One codec descriptor per audio track, in encounter order.
    pub audio_codecs: Vec<String>,
    /// One language per audio track, in encounter order.
    pub audio_languages: Vec<String>,
    /// One language per subtitle track, in encounter order.
    pub subtitle_languages: Vec<String>,
    /// One format per subtitle track, in encounter order.
    pub subtitle_formats: Vec<String>,
    /// "MULTI", a mapped display tag, or the uppercased raw language.
    pub language_tag: String,
    /// Source keyword recovered from the container title.
    pub source: String,
}

impl Default for MediaAttributes {
    fn default() -> Self {
        Self {
            format: UNKNOWN.to_string(),
            duration: UNKNOWN.to_string(),
            overall_bitrate: UNKNOWN.to_string(),
            video_codec: UNKNOWN.to_string(),
            resolution: UNKNOWN.to_string(),
            width: UNKNOWN.to_string(),
            height: UNKNOWN.to_string(),
            audio_codecs: Vec::new(),
            audio_languages: Vec::new(),
            subtitle_languages: Vec::new(),
            subtitle_formats: Vec::new(),
            language_tag: UNKNOWN.to_string(),
            source: UNKNOWN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_default_to_unknown() {
        let attrs = MediaAttributes::default();
        assert_eq!(attrs.format, "Unknown");
        assert_eq!(attrs.resolution, "Unknown");
        assert_eq!(attrs.language_tag, "Unknown");
        assert_eq!(attrs.source, "Unknown");
        assert!(attrs.audio_codecs.is_empty());
        assert!(attrs.subtitle_languages.is_empty());
    }

    #[test]
    fn track_record_serde_is_kind_tagged() {
        let track = TrackRecord::Audio(AudioTrack {
            format: Some("AAC".into()),
            channels: Some("2".into()),
            language: Some("en".into()),
        });
        let json = serde_json::to_string(&track).unwrap();
        assert!(json.contains(r#""kind":"audio""#));
        let back: TrackRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, track);
    }
}
