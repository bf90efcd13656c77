//! Recognition patterns shared by the classifier and the normalizer.
//!
//! The keyword lists and regexes live in exactly one place: a single
//! [`PatternLibrary`] compiled once and handed by reference to both the
//! classifier and the normalizer.

use once_cell::sync::Lazy;
use regex::Regex;

/// Series markers in recognition order: `SxxEyy` plus the French and
/// English season labels and their pluralized forms.
const SERIES_MARKERS: &[&str] = &[
    r"(?i)s\d+e\d+",
    r"(?i)saison\s*\d+",
    r"(?i)season\s*\d+",
    r"(?i)saisons?\s*\d+",
    r"(?i)seasons?\s*\d+",
];

/// Season folder markers: the series markers minus the episode-bearing
/// `SxxEyy` form.
const SEASON_MARKERS: &[&str] = &[
    r"(?i)saison\s*\d+",
    r"(?i)season\s*\d+",
    r"(?i)saisons?\s*\d+",
    r"(?i)seasons?\s*\d+",
];

/// Recognized video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &[".mkv", ".mp4", ".avi"];

/// Source keywords in priority order; the first match wins.
const SOURCE_KEYWORDS: &[&str] = &[
    "BluRay", "HDTV", "WEB-DL", "WEBRip", "DVDRip", "BDRip", "BRRip",
];

/// Language display tags, keyed by the exact code/name forms mediainfo
/// emits.
const LANGUAGE_TAGS: &[(&str, &str)] = &[
    ("French", "FRENCH"),
    ("English", "ENGLISH"),
    ("fr", "FRENCH"),
    ("en", "ENGLISH"),
    ("es", "SPANISH"),
    ("de", "GERMAN"),
    ("it", "ITALIAN"),
];

static SHARED: Lazy<PatternLibrary> = Lazy::new(PatternLibrary::compile);

/// Compiled recognition patterns and keyword tables.
#[derive(Debug)]
pub struct PatternLibrary {
    series_markers: Vec<Regex>,
    season_markers: Vec<Regex>,
}

impl PatternLibrary {
    /// The process-wide compiled library.
    pub fn shared() -> &'static PatternLibrary {
        &SHARED
    }

    fn compile() -> Self {
        // All patterns are literals; compilation cannot fail.
        let build = |patterns: &[&str]| {
            patterns
                .iter()
                .map(|p| Regex::new(p).unwrap())
                .collect::<Vec<_>>()
        };
        Self {
            series_markers: build(SERIES_MARKERS),
            season_markers: build(SEASON_MARKERS),
        }
    }

    /// Whether `name` carries any series marker.
    pub fn is_series_marker(&self, name: &str) -> bool {
        self.series_markers.iter().any(|re| re.is_match(name))
    }

    /// Whether `name` looks like a season folder.
    pub fn is_season_marker(&self, name: &str) -> bool {
        self.season_markers.iter().any(|re| re.is_match(name))
    }

    /// Case-insensitive extension check against the recognized video set.
    pub fn is_video_file(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
    }

    /// The first source keyword contained in `text`, matched
    /// case-insensitively in priority order.
    pub fn match_source(&self, text: &str) -> Option<&'static str> {
        let lower = text.to_lowercase();
        SOURCE_KEYWORDS
            .iter()
            .copied()
            .find(|kw| lower.contains(&kw.to_lowercase()))
    }

    /// Display tag for a single audio language, when the exact form is in
    /// the table.
    pub fn language_tag(&self, language: &str) -> Option<&'static str> {
        LANGUAGE_TAGS
            .iter()
            .find(|(key, _)| *key == language)
            .map(|(_, tag)| *tag)
    }
}
