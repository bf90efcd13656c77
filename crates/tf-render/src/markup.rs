//! BBCode forum post.
//!
//! The poster image, cast, genre and synopsis sections are fixed
//! placeholders for a human to fill in before posting; the core only ever
//! populates the technical block.

use tf_analyze::{Classification, ContentType};
use tf_media::MediaAttributes;

use crate::{kilobits, minutes, title};

/// Build the BBCode description for a classified directory.
pub fn markup(classification: &Classification, attributes: &MediaAttributes) -> String {
    match classification.content_type {
        ContentType::Series => series_markup(classification, attributes),
        ContentType::Movie => movie_markup(classification, attributes),
    }
}

fn series_markup(classification: &Classification, attributes: &MediaAttributes) -> String {
    let torrent_title = title(classification, attributes);
    // Episode runtime defaults to the customary 45 minutes when the probe
    // gave nothing numeric.
    let duration = minutes(&attributes.duration)
        .map(|m| format!("{m}m"))
        .unwrap_or_else(|| "45m".to_string());

    format!(
        "[center][img]https://URL_DE_VOTRE_IMAGE/poster.jpg[/img][/center]\n\
         \n\
         [center][size=18][b]{torrent_title}[/b][/size][/center]\n\
         \n\
         [center][img]https://forward.pm/img/informations.png[/img]\n\
         \n\
         [b]Créateurs:[/b] À compléter\n\
         [b]Acteurs:[/b]\n\
         Acteur 1,\n\
         Acteur 2,\n\
         Acteur 3,\n\
         Acteur 4\n\
         [b]Durée:[/b] {duration}\n\
         [b]Genre:[/b] À compléter\n\
         [b]Diffusion:[/b] {range}[/center]\n\
         \n\
         [center][img]https://forward.pm/img/synopsis.png[/img]\n\
         \n\
         À compléter[/center]\n\
         \n\
         [center][img]https://forward.pm/img/upload.png[/img]\n\
         [/center][center][b]Format:[/b] {format}\n\
         [b]Langues:[/b] {lang} ({languages})\n\
         [b]Source:[/b] {source}\n\
         [b]Résolution: [/b]{resolution} ({width}x{height})\n\
         [b]Codec vidéo:[/b] {codec}\n\
         [b]Bitrate vidéo:[/b] ~{bitrate} kb/s\n\
         [b]Codec audio:[/b] {audio}\n\
         [b]Sous-titres:[/b] {subtitles}\n\
         [b]Nombre d'épisodes: [/b]{episodes}\n\
         [b]Nombre de saisons:[/b] {seasons}[/center]\n",
        torrent_title = torrent_title,
        duration = duration,
        range = classification.year_range,
        format = attributes.format,
        lang = attributes.language_tag,
        languages = join_or(&attributes.audio_languages, "Unknown"),
        source = attributes.source,
        resolution = attributes.resolution,
        width = attributes.width,
        height = attributes.height,
        codec = first_token(&attributes.video_codec),
        bitrate = kilobits(&attributes.overall_bitrate),
        audio = join_or(&attributes.audio_codecs, "Unknown"),
        subtitles = join_or(&attributes.subtitle_languages, "None"),
        episodes = classification.episode_count,
        seasons = classification.season_count,
    )
}

fn movie_markup(classification: &Classification, attributes: &MediaAttributes) -> String {
    let torrent_title = title(classification, attributes);
    let duration = minutes(&attributes.duration)
        .map(|m| format!("{m}m"))
        .unwrap_or_else(|| "?".to_string());

    format!(
        "[center][img]https://URL_DE_VOTRE_IMAGE/poster.jpg[/img][/center]\n\
         \n\
         [center][size=18][b]{torrent_title}[/b][/size][/center]\n\
         \n\
         [center][img]https://forward.pm/img/informations.png[/img]\n\
         \n\
         [b]Réalisateur:[/b] À compléter\n\
         [b]Acteurs:[/b]\n\
         Acteur 1,\n\
         Acteur 2,\n\
         Acteur 3\n\
         [b]Durée:[/b] {duration}\n\
         [b]Genre:[/b] À compléter\n\
         [b]Année de sortie:[/b] {year}[/center]\n\
         \n\
         [center][img]https://forward.pm/img/synopsis.png[/img]\n\
         \n\
         À compléter[/center]\n\
         \n\
         [center][img]https://forward.pm/img/upload.png[/img]\n\
         [/center][center][b]Format:[/b] {format}\n\
         [b]Langues:[/b] {lang} ({languages})\n\
         [b]Source:[/b] {source}\n\
         [b]Résolution: [/b]{resolution} ({width}x{height})\n\
         [b]Codec vidéo:[/b] {codec}\n\
         [b]Bitrate vidéo:[/b] ~{bitrate} kb/s\n\
         [b]Codec audio:[/b] {audio}\n\
         [b]Sous-titres:[/b] {subtitles}\n\
         [b]Durée:[/b] {duration}[/center]\n",
        torrent_title = torrent_title,
        duration = duration,
        year = classification.year_range,
        format = attributes.format,
        lang = attributes.language_tag,
        languages = join_or(&attributes.audio_languages, "Unknown"),
        source = attributes.source,
        resolution = attributes.resolution,
        width = attributes.width,
        height = attributes.height,
        codec = first_token(&attributes.video_codec),
        bitrate = kilobits(&attributes.overall_bitrate),
        audio = join_or(&attributes.audio_codecs, "Unknown"),
        subtitles = join_or(&attributes.subtitle_languages, "None"),
    )
}

fn first_token(s: &str) -> &str {
    s.split_whitespace().next().unwrap_or(s)
}

fn join_or(values: &[String], fallback: &str) -> String {
    if values.is_empty() {
        fallback.to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Classification {
        Classification {
            content_type: ContentType::Series,
            title: "Show Name".into(),
            year: Some("2010".into()),
            season_count: 2,
            episode_count: 20,
            year_range: "2010-2011".into(),
        }
    }

    fn movie() -> Classification {
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
            duration: "2700".into(),
            overall_bitrate: "4500000".into(),
            video_codec: "HEVC (H.265)".into(),
            resolution: "1080p".into(),
            width: "1920".into(),
            height: "1080".into(),
            audio_codecs: vec!["E-AC-3 6 ch".into()],
            audio_languages: vec!["fr".into(), "en".into()],
            subtitle_languages: vec!["fr".into()],
            subtitle_formats: vec!["UTF-8".into()],
            language_tag: "MULTI".into(),
            source: "WEB-DL".into(),
        }
    }

    #[test]
    fn series_markup_embeds_title_and_counts() {
        let text = markup(&series(), &attributes());
        assert!(text.contains(
            "[b]Show Name (2010-2011) - Intégrale - MULTI - WEB-DL - 1080p - HEVC[/b]"
        ));
        assert!(text.contains("[b]Nombre d'épisodes: [/b]20"));
        assert!(text.contains("[b]Nombre de saisons:[/b] 2"));
        assert!(text.contains("[b]Langues:[/b] MULTI (fr, en)"));
        assert!(text.contains("[b]Diffusion:[/b] 2010-2011"));
    }

    #[test]
    fn series_duration_defaults_to_45m() {
        let mut attrs = attributes();
        attrs.duration = "Unknown".into();
        let text = markup(&series(), &attrs);
        assert!(text.contains("[b]Durée:[/b] 45m"));
    }

    #[test]
    fn movie_markup_has_release_year_and_no_counts() {
        let text = markup(&movie(), &attributes());
        assert!(text.contains("[b]Année de sortie:[/b] 1999"));
        assert!(text.contains("[b]Réalisateur:[/b] À compléter"));
        assert!(text.contains("[b]Durée:[/b] 45m"));
        assert!(!text.contains("Nombre de saisons"));
    }

    #[test]
    fn movie_duration_degrades_to_question_mark() {
        let mut attrs = attributes();
        attrs.duration = "Unknown".into();
        let text = markup(&movie(), &attrs);
        assert!(text.contains("[b]Durée:[/b] ?"));
    }

    #[test]
    fn placeholders_are_left_for_humans() {
        let text = markup(&movie(), &attributes());
        assert!(text.contains("https://URL_DE_VOTRE_IMAGE/poster.jpg"));
        assert!(text.contains("À compléter"));
    }
}
