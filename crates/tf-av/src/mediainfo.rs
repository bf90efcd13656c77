//! MediaInfo-based [`MediaProbe`] implementation.
//!
//! Shells out to `mediainfo --Output=JSON <file>` and maps the JSON track
//! array into [`TrackRecord`]s. The human-readable report embedded into
//! the NFO comes from a second run without the JSON flag.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tf_core::{Error, Result};
use tf_media::{
    AudioTrack, GeneralTrack, MediaProbe, SubtitleTrack, TrackRecord, VideoTrack,
};

use crate::command::{block_on, ToolCommand};

/// A prober backed by the `mediainfo` CLI.
#[derive(Debug, Clone)]
pub struct MediaInfoProber {
    mediainfo_path: PathBuf,
}

impl MediaInfoProber {
    /// Create a new prober using the given mediainfo path.
    pub fn new(mediainfo_path: PathBuf) -> Self {
        Self { mediainfo_path }
    }

    /// Create a prober that finds mediainfo on `PATH`.
    pub fn from_path() -> Option<Self> {
        which::which("mediainfo").ok().map(Self::new)
    }

    async fn probe_async(&self, path: &Path) -> Result<Vec<TrackRecord>> {
        let output = ToolCommand::new(self.mediainfo_path.clone())
            .arg("--Output=JSON")
            .arg(path.to_string_lossy())
            .execute()
            .await?;

        let mi: MiOutput = serde_json::from_str(&output.stdout)
            .map_err(|e| Error::Probe(format!("mediainfo JSON parse error: {e}")))?;

        Ok(map_tracks(mi))
    }

    async fn probe_raw_async(&self, path: &Path) -> Result<String> {
        let output = ToolCommand::new(self.mediainfo_path.clone())
            .arg(path.to_string_lossy())
            .execute()
            .await?;
        Ok(output.stdout)
    }
}

impl MediaProbe for MediaInfoProber {
    fn name(&self) -> &'static str {
        "mediainfo"
    }

    fn probe(&self, path: &Path) -> Result<Vec<TrackRecord>> {
        block_on("mediainfo", self.probe_async(path))
    }

    fn probe_raw(&self, path: &Path) -> Result<Option<String>> {
        block_on("mediainfo", self.probe_raw_async(path)).map(Some)
    }

    fn supports(&self, path: &Path) -> bool {
        path.extension().is_some()
    }
}

// ---------------------------------------------------------------------------
// JSON structures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct MiOutput {
    media: Option<MiMedia>,
}

#[derive(Debug, Deserialize)]
struct MiMedia {
    #[serde(default)]
    track: Vec<MiTrack>,
}

#[derive(Debug, Deserialize)]
struct MiTrack {
    #[serde(rename = "@type")]
    track_type: String,

    #[serde(rename = "Format")]
    format: Option<String>,

    #[serde(rename = "Duration")]
    duration: Option<String>,

    #[serde(rename = "OverallBitRate")]
    overall_bitrate: Option<String>,

    #[serde(rename = "Title")]
    title: Option<String>,

    #[serde(rename = "Movie_name")]
    movie_name: Option<String>,

    #[serde(rename = "Width")]
    width: Option<String>,

    #[serde(rename = "Height")]
    height: Option<String>,

    #[serde(rename = "Channels")]
    channels: Option<String>,

    #[serde(rename = "Language")]
    language: Option<String>,
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

fn map_tracks(mi: MiOutput) -> Vec<TrackRecord> {
    let Some(media) = mi.media else {
        return Vec::new();
    };

    media
        .track
        .into_iter()
        .filter_map(|track| match track.track_type.as_str() {
            "General" => Some(TrackRecord::General(GeneralTrack {
                format: track.format,
                duration: track.duration,
                overall_bitrate: track.overall_bitrate,
                // mediainfo emits the container title as either field,
                // depending on version and container.
                title: track.movie_name.or(track.title),
            })),
            "Video" => Some(TrackRecord::Video(VideoTrack {
                format: track.format,
                width: track.width,
                height: track.height,
            })),
            "Audio" => Some(TrackRecord::Audio(AudioTrack {
                format: track.format,
                channels: track.channels,
                language: track.language,
            })),
            "Text" => Some(TrackRecord::Subtitle(SubtitleTrack {
                format: track.format,
                language: track.language,
            })),
            _ => None,
        })
        .collect()
}
