//! Folding raw track records into [`MediaAttributes`].
//!
//! Normalization is deliberately lenient: probe output differs across
//! containers, so every missing field degrades to its documented default
//! instead of failing. The only per-kind subtlety is that General and
//! Video scalars are overwritten by later tracks of the same kind, while
//! audio and subtitle lists grow across all tracks of the kind.

use std::collections::BTreeSet;

use tf_core::{PatternLibrary, UNKNOWN};

use crate::types::{
    AudioTrack, GeneralTrack, MediaAttributes, SubtitleTrack, TrackRecord, VideoTrack,
};

/// Fold a probe's track records into canonical attributes.
pub fn normalize(tracks: &[TrackRecord], patterns: &PatternLibrary) -> MediaAttributes {
    let mut attrs = MediaAttributes::default();

    for track in tracks {
        match track {
            TrackRecord::General(t) => fold_general(t, patterns, &mut attrs),
            TrackRecord::Video(t) => fold_video(t, &mut attrs),
            TrackRecord::Audio(t) => fold_audio(t, &mut attrs),
            TrackRecord::Subtitle(t) => fold_subtitle(t, &mut attrs),
        }
    }

    attrs.language_tag = derive_language_tag(&attrs.audio_languages, patterns);
    attrs
}

fn fold_general(track: &GeneralTrack, patterns: &PatternLibrary, attrs: &mut MediaAttributes) {
    attrs.format = or_unknown(&track.format);
    attrs.duration = or_unknown(&track.duration);
    attrs.overall_bitrate = or_unknown(&track.overall_bitrate);
    attrs.source = track
        .title
        .as_deref()
        .and_then(|title| patterns.match_source(title))
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string());
}

fn fold_video(track: &VideoTrack, attrs: &mut MediaAttributes) {
    attrs.width = or_unknown(&track.width);
    attrs.height = or_unknown(&track.height);
    attrs.resolution = track
        .height
        .as_deref()
        .and_then(parse_numeric::<u32>)
        .map(resolution_tier)
        .unwrap_or_else(|| UNKNOWN.to_string());
    attrs.video_codec = match track.format.as_deref() {
        Some("HEVC") => "HEVC (H.265)".to_string(),
        Some("AVC") => "AVC (H.264)".to_string(),
        Some(other) => other.to_string(),
        None => UNKNOWN.to_string(),
    };
}

fn fold_audio(track: &AudioTrack, attrs: &mut MediaAttributes) {
    attrs
        .audio_languages
        .push(track.language.clone().unwrap_or_else(|| UNKNOWN.to_string()));

    let channels = track
        .channels
        .as_deref()
        .unwrap_or("")
        .replace("channels", "ch");
    let descriptor = format!("{} {}", track.format.as_deref().unwrap_or(""), channels);
    attrs.audio_codecs.push(descriptor.trim().to_string());
}

fn fold_subtitle(track: &SubtitleTrack, attrs: &mut MediaAttributes) {
    attrs
        .subtitle_languages
        .push(track.language.clone().unwrap_or_else(|| UNKNOWN.to_string()));
    attrs
        .subtitle_formats
        .push(track.format.clone().unwrap_or_else(|| UNKNOWN.to_string()));
}

/// "MULTI" when distinct audio languages disagree; a display tag otherwise.
fn derive_language_tag(languages: &[String], patterns: &PatternLibrary) -> String {
    let distinct: BTreeSet<&str> = languages.iter().map(String::as_str).collect();
    match distinct.len() {
        0 => UNKNOWN.to_string(),
        1 => {
            let language = languages[0].as_str();
            patterns
                .language_tag(language)
                .map(str::to_string)
                .unwrap_or_else(|| language.to_uppercase())
        }
        _ => "MULTI".to_string(),
    }
}

/// An optional scalar's value, or the documented `UNKNOWN` default when absent.
fn or_unknown(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| UNKNOWN.to_string())
}

/// Resolution tier by height threshold.
fn resolution_tier(height: u32) -> String {
    if height >= 2160 {
        "4K".to_string()
    } else if height >= 1080 {
        "1080p".to_string()
    } else if height >= 720 {
        "720p".to_string()
    } else {
        format!("{height}p")
    }
}

/// Parse the leading numeric token out of values like "1080" or
/// "1080 pixels".
fn parse_numeric<T: std::str::FromStr>(s: &str) -> Option<T> {
    s.split_whitespace().next().and_then(|n| n.parse().ok())
}
