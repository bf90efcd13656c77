//! mktorrent-based [`Packager`] implementation.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tf_core::Result;

use crate::command::{block_on, ToolCommand};

/// Packaging hashes the whole source directory; allow an hour.
const PACKAGE_TIMEOUT: Duration = Duration::from_secs(3600);

/// Produces a torrent artifact for a source directory.
///
/// Implementations must be safe to share across threads (`Send + Sync`).
pub trait Packager: Send + Sync {
    /// Human-readable name identifying this packager implementation.
    fn name(&self) -> &'static str;

    /// Package `source_dir` into a torrent at `output`, announcing on
    /// `tracker_url`.
    fn package(&self, source_dir: &Path, tracker_url: &str, output: &Path) -> Result<()>;
}

/// A packager backed by the `mktorrent` CLI.
#[derive(Debug, Clone)]
pub struct MktorrentPackager {
    mktorrent_path: PathBuf,
    piece_length: u8,
}

impl MktorrentPackager {
    /// Create a new packager using the given mktorrent path and
    /// piece-length exponent.
    pub fn new(mktorrent_path: PathBuf, piece_length: u8) -> Self {
        Self {
            mktorrent_path,
            piece_length,
        }
    }

    /// Create a packager that finds mktorrent on `PATH`.
    pub fn from_path(piece_length: u8) -> Option<Self> {
        which::which("mktorrent")
            .ok()
            .map(|p| Self::new(p, piece_length))
    }

    /// Argument vector for one invocation; split out for testability.
    fn build_args(&self, source_dir: &Path, tracker_url: &str, output: &Path) -> Vec<String> {
        vec![
            "-v".to_string(),
            "-l".to_string(),
            self.piece_length.to_string(),
            "-a".to_string(),
            tracker_url.to_string(),
            "-o".to_string(),
            output.to_string_lossy().into_owned(),
            source_dir.to_string_lossy().into_owned(),
        ]
    }

    async fn package_async(
        &self,
        source_dir: &Path,
        tracker_url: &str,
        output: &Path,
    ) -> Result<()> {
        ToolCommand::new(self.mktorrent_path.clone())
            .args(self.build_args(source_dir, tracker_url, output))
            .timeout(PACKAGE_TIMEOUT)
            .execute()
            .await?;
        Ok(())
    }
}

impl Packager for MktorrentPackager {
    fn name(&self) -> &'static str {
        "mktorrent"
    }

    fn package(&self, source_dir: &Path, tracker_url: &str, output: &Path) -> Result<()> {
        block_on(
            "mktorrent",
            self.package_async(source_dir, tracker_url, output),
        )
    }
}
