//! tf-core: shared error type, configuration, and recognition patterns.
//!
//! This crate is the foundational dependency for all other tf-* crates,
//! providing the unified error type, application configuration, and the
//! compiled pattern library shared by the classifier and the normalizer.

pub mod config;
pub mod error;
pub mod patterns;

// Re-export the most commonly used items at the crate root.
pub use config::Config;
pub use error::{Error, Result};
pub use patterns::PatternLibrary;

/// Default display value for any attribute the probe or the folder name did
/// not provide.
pub const UNKNOWN: &str = "Unknown";
