//! tf-analyze: heuristic content classification for media directories.
//!
//! The classifier never touches the filesystem: it walks a read-only
//! [`DirectoryEntry`] snapshot materialized up front by the caller and
//! infers the content type, title, year data, and season/episode counts
//! from folder and file names alone.

pub mod classifier;
pub mod snapshot;

pub use classifier::{classify, classify_with_year, Classification, ContentType};
pub use snapshot::DirectoryEntry;
