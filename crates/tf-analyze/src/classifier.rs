//! Heuristic content classification from folder and file names.
//!
//! Type detection is an ordered list of independent rules evaluated in
//! priority order: explicit naming conventions outrank population-based
//! inference, so the marker rules run first and the population rule is the
//! terminal fallback.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tf_core::{Error, PatternLibrary, Result, UNKNOWN};

use crate::snapshot::DirectoryEntry;

/// `<title> (<year>)` with an optional `-<year2>` range suffix.
static TITLE_YEAR_PARENS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.+?)\s*\((\d{4})(?:-\d{4})?\)").unwrap());

/// `<title> <year>` with a trailing boundary.
static TITLE_YEAR_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.+?)\s+(\d{4})(?:\s|$)").unwrap());

/// Season number out of `SxxEyy`-style tokens.
static SEASON_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)s(\d+)e").unwrap());

/// Kind of content a directory holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Series,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Series => write!(f, "series"),
        }
    }
}

/// Result of classifying a media directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub content_type: ContentType,
    /// Title extracted from the root folder name, trimmed.
    pub title: String,
    /// Raw year text matched in the folder name, if any.
    pub year: Option<String>,
    /// Season count; always 1 for movies.
    pub season_count: u32,
    /// Recognized video files in the subtree; always 1 for movies.
    pub episode_count: u32,
    /// Display range: the single year for movies, `<start>-<end>` for
    /// series, `"Unknown"` when no year was extracted.
    pub year_range: String,
}

impl Classification {
    /// The extracted year as a number, when present and numeric.
    pub fn primary_year(&self) -> Option<i32> {
        self.year.as_deref().and_then(|y| y.parse().ok())
    }
}

/// One type-detection rule: `Some` decides the type, `None` defers to the
/// next rule.
type DetectionRule = fn(&DirectoryEntry, &PatternLibrary) -> Option<ContentType>;

/// Detection rules in priority order. The population rule always decides,
/// so the chain cannot fall through.
const DETECTION_RULES: &[DetectionRule] = &[
    marker_in_root_name,
    marker_in_subdirectory,
    marker_in_filenames,
    population,
];

/// Classify `root`, bounding series year ranges by the current calendar
/// year.
pub fn classify(root: &DirectoryEntry, patterns: &PatternLibrary) -> Result<Classification> {
    classify_with_year(root, patterns, chrono::Utc::now().year())
}

/// Classify with an explicit "current year"; split out so tests are not
/// tied to the wall clock.
pub fn classify_with_year(
    root: &DirectoryEntry,
    patterns: &PatternLibrary,
    current_year: i32,
) -> Result<Classification> {
    let video_count = root.video_file_count(patterns) as u32;
    if video_count == 0 {
        return Err(Error::EmptyContent {
            path: PathBuf::from(root.name()),
        });
    }

    let content_type = DETECTION_RULES
        .iter()
        .find_map(|rule| rule(root, patterns))
        .unwrap_or(ContentType::Movie);

    let (title, year) = extract_title_year(root.name());

    Ok(match content_type {
        ContentType::Movie => Classification {
            content_type,
            title,
            year_range: year.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            year,
            season_count: 1,
            episode_count: 1,
        },
        ContentType::Series => {
            let season_count = count_seasons(root, patterns);
            Classification {
                content_type,
                title,
                year_range: year_range(year.as_deref(), season_count, current_year),
                year,
                season_count,
                episode_count: video_count,
            }
        }
    })
}

// -------------------------------------------------------------------------
// Type detection rules
// -------------------------------------------------------------------------

fn marker_in_root_name(root: &DirectoryEntry, patterns: &PatternLibrary) -> Option<ContentType> {
    patterns
        .is_series_marker(root.name())
        .then_some(ContentType::Series)
}

fn marker_in_subdirectory(root: &DirectoryEntry, patterns: &PatternLibrary) -> Option<ContentType> {
    root.children()
        .iter()
        .filter(|child| child.is_dir())
        .any(|child| patterns.is_series_marker(child.name()))
        .then_some(ContentType::Series)
}

fn marker_in_filenames(root: &DirectoryEntry, patterns: &PatternLibrary) -> Option<ContentType> {
    let mut found = false;
    root.for_each_file(&mut |name| {
        if patterns.is_series_marker(name) {
            found = true;
        }
    });
    found.then_some(ContentType::Series)
}

/// Terminal rule: more than one video file is assumed to be a series.
fn population(root: &DirectoryEntry, patterns: &PatternLibrary) -> Option<ContentType> {
    Some(if root.video_file_count(patterns) > 1 {
        ContentType::Series
    } else {
        ContentType::Movie
    })
}

// -------------------------------------------------------------------------
// Title, year, and season extraction
// -------------------------------------------------------------------------

/// Title and raw year text out of the root folder name.
fn extract_title_year(folder_name: &str) -> (String, Option<String>) {
    for re in [&*TITLE_YEAR_PARENS, &*TITLE_YEAR_BARE] {
        if let Some(caps) = re.captures(folder_name) {
            return (caps[1].trim().to_string(), Some(caps[2].to_string()));
        }
    }
    (folder_name.to_string(), None)
}

/// Season count: season-marker subfolders first, `SxxEyy` tokens in video
/// filenames as the fallback, floored at 1.
fn count_seasons(root: &DirectoryEntry, patterns: &PatternLibrary) -> u32 {
    let from_folders = root
        .children()
        .iter()
        .filter(|child| child.is_dir() && patterns.is_season_marker(child.name()))
        .count() as u32;
    if from_folders > 0 {
        return from_folders;
    }

    let mut seasons: BTreeSet<u32> = BTreeSet::new();
    root.for_each_file(&mut |name| {
        if patterns.is_video_file(name) {
            if let Some(caps) = SEASON_NUMBER.captures(name) {
                if let Ok(n) = caps[1].parse() {
                    seasons.insert(n);
                }
            }
        }
    });
    (seasons.len() as u32).max(1)
}

/// Display range for a series.
///
/// Heuristic: roughly one season per two years, capped at the current
/// year. A non-numeric matched year degrades to the raw text.
fn year_range(year: Option<&str>, season_count: u32, current_year: i32) -> String {
    let Some(year) = year else {
        return UNKNOWN.to_string();
    };
    match year.parse::<i32>() {
        Ok(start) => {
            let end = (start + (season_count as i32 / 2).max(1)).min(current_year);
            format!("{start}-{end}")
        }
        Err(_) => year.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> &'static PatternLibrary {
        PatternLibrary::shared()
    }

    fn file(name: &str) -> DirectoryEntry {
        DirectoryEntry::file(name)
    }

    fn dir(name: &str, children: Vec<DirectoryEntry>) -> DirectoryEntry {
        DirectoryEntry::dir(name, children)
    }

    #[test]
    fn season_folders_make_a_series() {
        let tree = dir(
            "Show Name (2010-2015)",
            vec![
                dir("Saison 1", vec![file("ep1.mkv")]),
                dir("Saison 2", vec![file("ep1.mkv")]),
            ],
        );
        let c = classify_with_year(&tree, patterns(), 2026).unwrap();
        assert_eq!(c.content_type, ContentType::Series);
        assert_eq!(c.title, "Show Name");
        assert_eq!(c.primary_year(), Some(2010));
        assert_eq!(c.season_count, 2);
        assert_eq!(c.episode_count, 2);
        assert_eq!(c.year_range, "2010-2011");
    }

    #[test]
    fn parenthesized_year_movie() {
        let tree = dir("Movie Title (1999)", vec![file("movie.mkv")]);
        let c = classify_with_year(&tree, patterns(), 2026).unwrap();
        assert_eq!(c.content_type, ContentType::Movie);
        assert_eq!(c.title, "Movie Title");
        assert_eq!(c.year.as_deref(), Some("1999"));
        assert_eq!(c.season_count, 1);
        assert_eq!(c.episode_count, 1);
        assert_eq!(c.year_range, "1999");
    }

    #[test]
    fn bare_year_with_trailing_boundary() {
        let tree = dir("Movie Title 1999 remaster", vec![file("movie.mkv")]);
        let c = classify_with_year(&tree, patterns(), 2026).unwrap();
        assert_eq!(c.title, "Movie Title");
        assert_eq!(c.year.as_deref(), Some("1999"));
    }

    #[test]
    fn no_year_uses_whole_folder_name() {
        let tree = dir("Some Obscure Film", vec![file("movie.avi")]);
        let c = classify_with_year(&tree, patterns(), 2026).unwrap();
        assert_eq!(c.content_type, ContentType::Movie);
        assert_eq!(c.title, "Some Obscure Film");
        assert_eq!(c.year, None);
        assert_eq!(c.year_range, "Unknown");
    }

    #[test]
    fn marker_in_root_name_wins() {
        let tree = dir("Breaking Show S01E01", vec![file("pilot.mkv")]);
        let c = classify_with_year(&tree, patterns(), 2026).unwrap();
        assert_eq!(c.content_type, ContentType::Series);
        // A single video file is still one episode of a one-season series.
        assert_eq!(c.season_count, 1);
        assert_eq!(c.episode_count, 1);
    }

    #[test]
    fn marker_in_filenames_beats_population() {
        let tree = dir(
            "Show Name",
            vec![file("Show.S01E01.mkv"), file("notes.txt")],
        );
        let c = classify_with_year(&tree, patterns(), 2026).unwrap();
        assert_eq!(c.content_type, ContentType::Series);
    }

    #[test]
    fn single_nested_video_without_markers_is_a_movie() {
        let tree = dir(
            "Film Night",
            vec![dir("disc", vec![file("feature.mkv")])],
        );
        let c = classify_with_year(&tree, patterns(), 2026).unwrap();
        assert_eq!(c.content_type, ContentType::Movie);
    }

    #[test]
    fn multiple_videos_without_markers_are_a_series() {
        let tree = dir(
            "Collection",
            vec![file("part1.mkv"), file("part2.mkv"), file("part3.mkv")],
        );
        let c = classify_with_year(&tree, patterns(), 2026).unwrap();
        assert_eq!(c.content_type, ContentType::Series);
        assert_eq!(c.episode_count, 3);
    }

    #[test]
    fn season_count_from_episode_tags_when_no_folders() {
        let tree = dir(
            "Show Name (2010)",
            vec![
                file("Show.S01E01.mkv"),
                file("Show.S01E02.mkv"),
                file("Show.S02E01.mkv"),
            ],
        );
        let c = classify_with_year(&tree, patterns(), 2026).unwrap();
        assert_eq!(c.season_count, 2);
        assert_eq!(c.episode_count, 3);
    }

    #[test]
    fn season_folders_outrank_episode_tags() {
        let tree = dir(
            "Show Name (2010)",
            vec![
                dir("Season 1", vec![file("Show.S01E01.mkv")]),
                dir("Season 2", vec![file("Show.S05E01.mkv")]),
            ],
        );
        let c = classify_with_year(&tree, patterns(), 2026).unwrap();
        assert_eq!(c.season_count, 2);
    }

    #[test]
    fn year_range_is_capped_at_current_year() {
        let tree = dir(
            "Long Show (2010)",
            vec![
                dir("Saison 1", vec![file("a.mkv")]),
                dir("Saison 2", vec![file("b.mkv")]),
                dir("Saison 3", vec![file("c.mkv")]),
                dir("Saison 4", vec![file("d.mkv")]),
                dir("Saison 5", vec![file("e.mkv")]),
                dir("Saison 6", vec![file("f.mkv")]),
                dir("Saison 7", vec![file("g.mkv")]),
                dir("Saison 8", vec![file("h.mkv")]),
            ],
        );
        // start + 8/2 = 2014, but the clock says 2012.
        let c = classify_with_year(&tree, patterns(), 2012).unwrap();
        assert_eq!(c.year_range, "2010-2012");
    }

    #[test]
    fn series_without_year_has_unknown_range() {
        let tree = dir(
            "Nameless Show",
            vec![dir("Saison 1", vec![file("a.mkv"), file("b.mkv")])],
        );
        let c = classify_with_year(&tree, patterns(), 2026).unwrap();
        assert_eq!(c.content_type, ContentType::Series);
        assert_eq!(c.year_range, "Unknown");
    }

    #[test]
    fn empty_tree_is_an_error() {
        let tree = dir("Empty Folder", vec![file("readme.txt")]);
        let err = classify_with_year(&tree, patterns(), 2026).unwrap_err();
        assert!(matches!(err, Error::EmptyContent { .. }));
    }

    #[test]
    fn classification_is_deterministic() {
        let tree = dir(
            "Show Name (2010-2015)",
            vec![
                dir("Saison 1", vec![file("ep1.mkv")]),
                dir("Saison 2", vec![file("ep1.mkv")]),
            ],
        );
        let a = classify_with_year(&tree, patterns(), 2026).unwrap();
        let b = classify_with_year(&tree, patterns(), 2026).unwrap();
        assert_eq!(a, b);
    }
}
