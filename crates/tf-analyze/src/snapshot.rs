//! Read-only snapshot of a media directory tree.
//!
//! Classification operates on names only; file contents are never read.
//! The provider (binary crate) materializes one [`DirectoryEntry`] per run
//! and the classifier walks the in-memory tree.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tf_core::PatternLibrary;

/// One node of a directory snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryEntry {
    /// A directory and its ordered children.
    Directory {
        name: String,
        children: Vec<DirectoryEntry>,
    },
    /// A file; the extension derives from the name.
    File { name: String },
}

impl DirectoryEntry {
    /// Convenience constructor for a directory node.
    pub fn dir(name: impl Into<String>, children: Vec<DirectoryEntry>) -> Self {
        Self::Directory {
            name: name.into(),
            children,
        }
    }

    /// Convenience constructor for a file node.
    pub fn file(name: impl Into<String>) -> Self {
        Self::File { name: name.into() }
    }

    /// The entry's own name.
    pub fn name(&self) -> &str {
        match self {
            Self::Directory { name, .. } | Self::File { name } => name,
        }
    }

    /// Immediate children; empty for files.
    pub fn children(&self) -> &[DirectoryEntry] {
        match self {
            Self::Directory { children, .. } => children,
            Self::File { .. } => &[],
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    /// Number of recognized video files in this subtree.
    pub fn video_file_count(&self, patterns: &PatternLibrary) -> usize {
        match self {
            Self::File { name } => usize::from(patterns.is_video_file(name)),
            Self::Directory { children, .. } => children
                .iter()
                .map(|child| child.video_file_count(patterns))
                .sum(),
        }
    }

    /// Visit every file name in the subtree, depth-first in snapshot order.
    pub fn for_each_file(&self, f: &mut impl FnMut(&str)) {
        match self {
            Self::File { name } => f(name),
            Self::Directory { children, .. } => {
                for child in children {
                    child.for_each_file(f);
                }
            }
        }
    }

    /// Path of the first recognized video file, relative to this entry.
    ///
    /// Children are visited in snapshot order, so the provider's sort order
    /// decides which file is "first".
    pub fn first_video_path(&self, patterns: &PatternLibrary) -> Option<PathBuf> {
        match self {
            Self::File { name } if patterns.is_video_file(name) => Some(PathBuf::from(name)),
            Self::File { .. } => None,
            Self::Directory { children, .. } => children.iter().find_map(|child| match child {
                Self::File { name } if patterns.is_video_file(name) => Some(PathBuf::from(name)),
                Self::File { .. } => None,
                Self::Directory { name, .. } => child
                    .first_video_path(patterns)
                    .map(|p| PathBuf::from(name).join(p)),
            }),
        }
    }
}
