//! tf-av: the external tool layer.
//!
//! Everything that shells out lives here: [`ToolCommand`] runs an
//! executable with a timeout, [`ToolRegistry`] resolves tool locations,
//! and the mediainfo/mktorrent adapters implement the core's
//! [`tf_media::MediaProbe`] and [`Packager`] seams.

pub mod command;
pub mod mediainfo;
pub mod mktorrent;
pub mod tools;

pub use command::{ToolCommand, ToolOutput};
pub use mediainfo::MediaInfoProber;
pub use mktorrent::{MktorrentPackager, Packager};
pub use tools::ToolRegistry;
