//! Plain-text NFO report.

use tf_analyze::{Classification, ContentType};
use tf_media::MediaAttributes;

use crate::{kilobits, minutes, plural};

/// Build the NFO report for a classified directory.
///
/// `raw_probe`, when present, is embedded verbatim in a delimited banner
/// ahead of the document.
pub fn report(
    classification: &Classification,
    attributes: &MediaAttributes,
    raw_probe: Option<&str>,
) -> String {
    let body = match classification.content_type {
        ContentType::Series => series_report(classification, attributes),
        ContentType::Movie => movie_report(classification, attributes),
    };
    match raw_probe {
        Some(raw) => {
            let rule = "=".repeat(80);
            format!("MEDIAINFO OUTPUT:\n{rule}\n{raw}\n{rule}\n\n{body}")
        }
        None => body,
    }
}

fn series_report(classification: &Classification, attributes: &MediaAttributes) -> String {
    let border = "░".repeat(74);
    let banner = banner_line(&classification.title, &classification.year_range);
    let seasons = classification.season_count;
    let episodes = classification.episode_count;
    let duration = minutes(&attributes.duration)
        .map(|m| m.to_string())
        .unwrap_or_else(|| "?".to_string());

    format!(
        "{border}\n\
         {banner}\n\
         {border}\n\
         \n\
         ▓ INFORMATIONS GÉNÉRALES\n\
         ▪ Titre.............: {title}\n\
         ▪ Année.............: {range}\n\
         ▪ Genres............: À compléter\n\
         ▪ Créateurs.........: À compléter\n\
         ▪ Acteurs principaux: À compléter\n\
         ▪ Saisons...........: {seasons} saison{sp} ({episodes} épisode{ep})\n\
         ▪ Langue............: {lang}\n\
         \n\
         ▓ INFORMATIONS TECHNIQUES\n\
         ▪ Format............: {format}\n\
         ▪ Durée moyenne.....: ~{duration} minutes par épisode\n\
         ▪ Source............: {source}\n\
         ▪ Résolution........: {resolution} ({width}x{height})\n\
         ▪ Codec Vidéo.......: {codec}\n\
         ▪ Bitrate Vidéo.....: ~{bitrate} kb/s\n\
         ▪ Codec Audio.......: {audio}\n\
         ▪ Sous-titres.......: {subtitles}\n\
         \n\
         ▓ SYNOPSIS\n\
         À compléter\n\
         \n\
         ▓ INFORMATIONS COMPLÉMENTAIRES\n\
         Ce torrent contient l'intégrale de la série {title}, de la saison 1 à \
         la saison {seasons}, en version {lang}.\n\
         \n\
         {border}\n",
        border = border,
        banner = banner,
        title = classification.title,
        range = classification.year_range,
        seasons = seasons,
        sp = plural(seasons),
        episodes = episodes,
        ep = plural(episodes),
        lang = attributes.language_tag,
        format = attributes.format,
        duration = duration,
        source = attributes.source,
        resolution = attributes.resolution,
        width = attributes.width,
        height = attributes.height,
        codec = attributes.video_codec,
        bitrate = kilobits(&attributes.overall_bitrate),
        audio = join_or(&attributes.audio_codecs, "Unknown"),
        subtitles = join_or(&attributes.subtitle_languages, "None"),
    )
}

fn movie_report(classification: &Classification, attributes: &MediaAttributes) -> String {
    let border = "░".repeat(74);
    let banner = banner_line(&classification.title, &classification.year_range);
    let duration = minutes(&attributes.duration)
        .map(|m| m.to_string())
        .unwrap_or_else(|| "?".to_string());

    format!(
        "{border}\n\
         {banner}\n\
         {border}\n\
         \n\
         ▓ INFORMATIONS GÉNÉRALES\n\
         ▪ Titre.............: {title}\n\
         ▪ Année.............: {year}\n\
         ▪ Genres............: À compléter\n\
         ▪ Réalisateur.......: À compléter\n\
         ▪ Acteurs principaux: À compléter\n\
         ▪ Langue............: {lang}\n\
         \n\
         ▓ INFORMATIONS TECHNIQUES\n\
         ▪ Format............: {format}\n\
         ▪ Durée.............: {duration} minutes\n\
         ▪ Source............: {source}\n\
         ▪ Résolution........: {resolution} ({width}x{height})\n\
         ▪ Codec Vidéo.......: {codec}\n\
         ▪ Bitrate Vidéo.....: ~{bitrate} kb/s\n\
         ▪ Codec Audio.......: {audio}\n\
         ▪ Sous-titres.......: {subtitles}\n\
         \n\
         ▓ SYNOPSIS\n\
         À compléter\n\
         \n\
         {border}\n",
        border = border,
        banner = banner,
        title = classification.title,
        year = classification.year_range,
        lang = attributes.language_tag,
        format = attributes.format,
        duration = duration,
        source = attributes.source,
        resolution = attributes.resolution,
        width = attributes.width,
        height = attributes.height,
        codec = attributes.video_codec,
        bitrate = kilobits(&attributes.overall_bitrate),
        audio = join_or(&attributes.audio_codecs, "Unknown"),
        subtitles = join_or(&attributes.subtitle_languages, "None"),
    )
}

/// Centered banner: `░…░ TITLE (range) ░…░`.
fn banner_line(title: &str, range: &str) -> String {
    let side = "░".repeat(22);
    format!("{side} {} ({range}) {side}", title.to_uppercase())
}

fn join_or(values: &[String], fallback: &str) -> String {
    if values.is_empty() {
        fallback.to_string()
    } else {
        values.join(", ")
    }
}
