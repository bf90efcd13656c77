//! The [`MediaProbe`] trait defining the interface for media file probing.

use std::path::Path;

use tf_core::Result;

use crate::types::TrackRecord;

/// A media prober capable of extracting track records from a file.
///
/// Implementations must be safe to share across threads (`Send + Sync`).
pub trait MediaProbe: Send + Sync {
    /// Human-readable name identifying this prober implementation.
    fn name(&self) -> &'static str;

    /// Probe a media file at the given path and return its track records
    /// in stream order.
    fn probe(&self, path: &Path) -> Result<Vec<TrackRecord>>;

    /// The prober's human-readable report for the same file, when it can
    /// produce one; embedded verbatim at the top of the NFO document.
    fn probe_raw(&self, _path: &Path) -> Result<Option<String>> {
        Ok(None)
    }

    /// Check whether this prober supports the given file path.
    ///
    /// Typically checks the file extension. A return value of `true` does
    /// not guarantee that [`MediaProbe::probe`] will succeed.
    fn supports(&self, path: &Path) -> bool;
}
