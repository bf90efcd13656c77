//! Directory snapshot provider.
//!
//! Materializes the read-only [`DirectoryEntry`] tree the classifier
//! consumes. Only names are read, never file contents, and children are
//! sorted by name so traversal order (and therefore "first video file") is
//! stable across platforms.

use std::path::Path;

use tf_analyze::DirectoryEntry;
use tf_core::{Error, Result};
use tracing::debug;

/// Build a snapshot of the directory tree rooted at `path`.
pub fn snapshot(path: &Path) -> Result<DirectoryEntry> {
    if !path.is_dir() {
        return Err(Error::Validation(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    let children = read_children(path)?;
    debug!("snapshot of {} complete", path.display());
    Ok(DirectoryEntry::dir(name, children))
}

fn read_children(dir: &Path) -> Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        if path.is_dir() {
            entries.push(DirectoryEntry::dir(name, read_children(&path)?));
        } else {
            entries.push(DirectoryEntry::file(name));
        }
    }
    entries.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(entries)
}
