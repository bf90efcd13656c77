//! Standardized release title.

use tf_analyze::{Classification, ContentType};
use tf_core::UNKNOWN;
use tf_media::MediaAttributes;

/// Build the release title for a classified directory.
///
/// Series form:
/// `<title> (<year range>) - Intégrale - <lang> - <source> - <resolution> - <codec>`.
/// Movies use the single year and drop the "Intégrale" marker.
pub fn title(classification: &Classification, attributes: &MediaAttributes) -> String {
    let codec = first_token(&attributes.video_codec);
    match classification.content_type {
        ContentType::Series => format!(
            "{} ({}) - Intégrale - {} - {} - {} - {}",
            classification.title,
            classification.year_range,
            attributes.language_tag,
            attributes.source,
            attributes.resolution,
            codec,
        ),
        ContentType::Movie => format!(
            "{} ({}) - {} - {} - {} - {}",
            classification.title,
            classification.year.as_deref().unwrap_or(UNKNOWN),
            attributes.language_tag,
            attributes.source,
            attributes.resolution,
            codec,
        ),
    }
}

/// First whitespace-delimited token, e.g. "HEVC" out of "HEVC (H.265)".
fn first_token(s: &str) -> &str {
    s.split_whitespace().next().unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes() -> MediaAttributes {
        MediaAttributes {
            video_codec: "HEVC (H.265)".into(),
            resolution: "1080p".into(),
            language_tag: "MULTI".into(),
            source: "BluRay".into(),
            ..MediaAttributes::default()
        }
    }

    #[test]
    fn series_title_carries_integrale_and_range() {
        let c = Classification {
            content_type: ContentType::Series,
            title: "Show Name".into(),
            year: Some("2010".into()),
            season_count: 3,
            episode_count: 30,
            year_range: "2010-2011".into(),
        };
        assert_eq!(
            title(&c, &attributes()),
            "Show Name (2010-2011) - Intégrale - MULTI - BluRay - 1080p - HEVC"
        );
    }

    #[test]
    fn movie_title_uses_single_year() {
        let c = Classification {
            content_type: ContentType::Movie,
            title: "Movie Title".into(),
            year: Some("1999".into()),
            season_count: 1,
            episode_count: 1,
            year_range: "1999".into(),
        };
        assert_eq!(
            title(&c, &attributes()),
            "Movie Title (1999) - MULTI - BluRay - 1080p - HEVC"
        );
    }

    #[test]
    fn movie_without_year_shows_unknown() {
        let c = Classification {
            content_type: ContentType::Movie,
            title: "Movie Title".into(),
            year: None,
            season_count: 1,
            episode_count: 1,
            year_range: "Unknown".into(),
        };
        assert!(title(&c, &attributes()).starts_with("Movie Title (Unknown) - "));
    }

    #[test]
    fn codec_first_token_only() {
        let c = Classification {
            content_type: ContentType::Movie,
            title: "M".into(),
            year: Some("2000".into()),
            season_count: 1,
            episode_count: 1,
            year_range: "2000".into(),
        };
        let mut attrs = attributes();
        attrs.video_codec = "AVC (H.264)".into();
        assert!(title(&c, &attrs).ends_with("- AVC"));
    }
}
