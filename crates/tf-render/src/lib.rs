//! tf-render: release title and report document generation.
//!
//! Rendering is pure formatting over an already-classified
//! ([`tf_analyze::Classification`]) and normalized
//! ([`tf_media::MediaAttributes`]) input: identical inputs always produce
//! byte-identical output. Missing-field defaults were resolved upstream;
//! the only degradation applied here is "?" for non-numeric bitrate and
//! duration values.

mod markup;
mod report;
mod title;

use tf_analyze::Classification;
use tf_media::MediaAttributes;

pub use markup::markup;
pub use report::report;
pub use title::title;

/// The three text artifacts derived from one classification + attribute
/// set.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocuments {
    /// Standardized release title; also the artifact file stem.
    pub title: String,
    /// Plain-text NFO report.
    pub report: String,
    /// BBCode forum post.
    pub markup: String,
}

/// Render all three documents.
///
/// `raw_probe`, when present, is embedded at the top of the report.
pub fn render(
    classification: &Classification,
    attributes: &MediaAttributes,
    raw_probe: Option<&str>,
) -> RenderedDocuments {
    RenderedDocuments {
        title: title(classification, attributes),
        report: report(classification, attributes, raw_probe),
        markup: markup(classification, attributes),
    }
}

/// Overall bitrate in kb/s for display, or "?" when the raw value is not
/// numeric.
pub(crate) fn kilobits(raw: &str) -> String {
    raw.parse::<u64>()
        .map(|bits| (bits / 1000).to_string())
        .unwrap_or_else(|_| "?".to_string())
}

/// Duration in whole minutes, when the raw seconds value parses.
pub(crate) fn minutes(raw: &str) -> Option<i64> {
    raw.parse::<f64>().ok().map(|secs| (secs / 60.0) as i64)
}

/// French plural suffix.
pub(crate) fn plural(count: u32) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tf_analyze::{Classification, ContentType};

    fn movie_classification() -> Classification {
        Classification {
            content_type: ContentType::Movie,
            title: "Movie Title".into(),
            year: Some("1999".into()),
            season_count: 1,
            episode_count: 1,
            year_range: "1999".into(),
        }
    }

    fn attributes() -> MediaAttributes {
        MediaAttributes {
            format: "Matroska".into(),
            duration: "7200".into(),
            overall_bitrate: "4500000".into(),
            video_codec: "HEVC (H.265)".into(),
            resolution: "1080p".into(),
            width: "1920".into(),
            height: "1080".into(),
            audio_codecs: vec!["E-AC-3 6 ch".into()],
            audio_languages: vec!["fr".into()],
            subtitle_languages: vec!["fr".into(), "en".into()],
            subtitle_formats: vec!["UTF-8".into(), "UTF-8".into()],
            language_tag: "FRENCH".into(),
            source: "BluRay".into(),
        }
    }

    #[test]
    fn rendering_is_byte_deterministic() {
        let c = movie_classification();
        let a = attributes();
        let first = render(&c, &a, None);
        let second = render(&c, &a, None);
        assert_eq!(first, second);
        assert_eq!(first.report.as_bytes(), second.report.as_bytes());
        assert_eq!(first.markup.as_bytes(), second.markup.as_bytes());
    }

    #[test]
    fn kilobits_divides_or_degrades() {
        assert_eq!(kilobits("4500000"), "4500");
        assert_eq!(kilobits("999"), "0");
        assert_eq!(kilobits("Unknown"), "?");
        assert_eq!(kilobits(""), "?");
    }

    #[test]
    fn minutes_truncates_fractional_seconds() {
        assert_eq!(minutes("7200"), Some(120));
        assert_eq!(minutes("5400.250"), Some(90));
        assert_eq!(minutes("119"), Some(1));
        assert_eq!(minutes("Unknown"), None);
    }

    #[test]
    fn plural_suffix() {
        assert_eq!(plural(1), "");
        assert_eq!(plural(2), "s");
    }
}
