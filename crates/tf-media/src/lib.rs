//! tf-media: probe track records, the canonical attribute schema, and the
//! normalization pass between them.
//!
//! The [`MediaProbe`] trait is the seam between this core and the external
//! probing tool; implementations live in tf-av.

pub mod normalize;
pub mod probe;
pub mod types;

pub use normalize::normalize;
pub use probe::MediaProbe;
pub use types::{
    AudioTrack, GeneralTrack, MediaAttributes, SubtitleTrack, TrackRecord, VideoTrack,
};
