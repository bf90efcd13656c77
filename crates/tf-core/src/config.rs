//! Application configuration types.
//!
//! The top-level [`Config`] struct is deserialized from JSON and carries
//! the tool-path overrides and torrent settings. Every section defaults
//! sensibly so a completely empty `{}` file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default tracker announce URL; a placeholder meant to be overridden per
/// run or per config file.
pub const DEFAULT_TRACKER_URL: &str = "http://tracker.example.com:6969/announce";

/// Default mktorrent piece-length exponent (24 = 16 MiB pieces).
pub const DEFAULT_PIECE_LENGTH: u8 = 24;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tools: ToolsConfig,
    pub torrent: TorrentConfig,
}

/// Explicit executable paths; `PATH` lookup is used for any unset tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub mediainfo_path: Option<PathBuf>,
    pub mktorrent_path: Option<PathBuf>,
}

/// Settings for torrent creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TorrentConfig {
    /// Tracker announce URL baked into created torrents.
    pub tracker_url: String,
    /// Piece-length exponent passed to mktorrent via `-l`.
    pub piece_length: u8,
}

impl Default for TorrentConfig {
    fn default() -> Self {
        Self {
            tracker_url: DEFAULT_TRACKER_URL.to_string(),
            piece_length: DEFAULT_PIECE_LENGTH,
        }
    }
}

impl Config {
    /// Deserialize a `Config` from a JSON string.
    ///
    /// This is intentionally string-based so the caller can read the file
    /// however it sees fit.
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| Error::Validation(format!("config parse error: {e}")))
    }

    /// Load configuration from a file path, falling back to defaults if the
    /// path is `None` or the file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config file at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read config file {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
