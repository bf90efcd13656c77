//! Unified error type for the torrentforge application.
//!
//! All crates funnel their failures into [`Error`]; the binary maps any
//! surfaced error to a non-zero exit code.

use std::path::PathBuf;

/// Unified error type covering all failure modes in torrentforge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No recognized video file was found under the target directory.
    #[error("no video files found under {}", path.display())]
    EmptyContent {
        /// The directory that was being classified.
        path: PathBuf,
    },

    /// Input data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// An external tool (mediainfo, mktorrent) is missing or returned an
    /// error.
    #[error("Tool error [{tool}]: {message}")]
    Tool {
        /// Name of the tool that failed.
        tool: String,
        /// Human-readable error description.
        message: String,
    },

    /// Probe output could not be decoded.
    #[error("Probe error: {0}")]
    Probe(String),
}

impl Error {
    /// Convenience constructor for [`Error::EmptyContent`].
    pub fn empty_content(path: impl Into<PathBuf>) -> Self {
        Error::EmptyContent { path: path.into() }
    }

    /// Convenience constructor for [`Error::Tool`].
    pub fn tool(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Tool {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
