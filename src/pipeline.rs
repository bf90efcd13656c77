//! End-to-end run: snapshot, classify + probe, normalize, render, write,
//! package.
//!
//! Classification and probing have no data dependency, so the probe runs
//! on its own thread while classification proceeds inline; both results
//! are joined before rendering. The three output stages are attempted
//! independently: a packaging failure never invalidates documents that
//! were already written.

use std::path::Path;

use tf_analyze::classify;
use tf_av::Packager;
use tf_core::{Error, PatternLibrary, Result};
use tf_media::{normalize, MediaProbe, TrackRecord};
use tf_render::{render, RenderedDocuments};
use tracing::{error, info};

use crate::scanner;

/// Per-stage success flags for one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageReport {
    /// The NFO report was written.
    pub report: bool,
    /// The BBCode description was written.
    pub markup: bool,
    /// The torrent artifact was created.
    pub torrent: bool,
}

impl StageReport {
    /// True when every stage succeeded.
    pub fn all_ok(&self) -> bool {
        self.report && self.markup && self.torrent
    }
}

/// Run the full pipeline for `folder`, writing artifacts into `out_dir`.
pub fn run(
    folder: &Path,
    tracker_url: &str,
    prober: &dyn MediaProbe,
    packager: &dyn Packager,
    out_dir: &Path,
) -> Result<StageReport> {
    let folder = folder
        .canonicalize()
        .map_err(|e| Error::Validation(format!("{}: {e}", folder.display())))?;
    let patterns = PatternLibrary::shared();

    let tree = scanner::snapshot(&folder)?;
    let relative = tree
        .first_video_path(patterns)
        .ok_or_else(|| Error::empty_content(&folder))?;
    let video_path = folder.join(relative);
    info!("probing {} with {}", video_path.display(), prober.name());

    let (classification, probed) = std::thread::scope(|s| {
        let probe_task = s.spawn(|| -> Result<(Vec<TrackRecord>, Option<String>)> {
            let tracks = prober.probe(&video_path)?;
            let raw = prober.probe_raw(&video_path)?;
            Ok((tracks, raw))
        });
        (classify(&tree, patterns), probe_task.join())
    });

    let classification = classification?;
    let (tracks, raw) = probed.map_err(|_| Error::Probe("probe thread panicked".into()))??;
    info!(
        "classified as {} ({} episode(s))",
        classification.content_type, classification.episode_count
    );

    let attributes = normalize(&tracks, patterns);
    let documents = render(&classification, &attributes, raw.as_deref());
    info!("release title: {}", documents.title);

    Ok(write_and_package(
        &folder, tracker_url, &documents, packager, out_dir,
    ))
}

/// Write the two documents and invoke the packager, recording per-stage
/// success.
fn write_and_package(
    folder: &Path,
    tracker_url: &str,
    documents: &RenderedDocuments,
    packager: &dyn Packager,
    out_dir: &Path,
) -> StageReport {
    let mut report = StageReport::default();

    let nfo_path = out_dir.join(format!("{}.nfo", documents.title));
    match std::fs::write(&nfo_path, &documents.report) {
        Ok(()) => {
            info!("wrote {}", nfo_path.display());
            report.report = true;
        }
        Err(e) => error!("failed to write {}: {e}", nfo_path.display()),
    }

    let markup_path = out_dir.join(format!("{}.txt", documents.title));
    match std::fs::write(&markup_path, &documents.markup) {
        Ok(()) => {
            info!("wrote {}", markup_path.display());
            report.markup = true;
        }
        Err(e) => error!("failed to write {}: {e}", markup_path.display()),
    }

    let torrent_path = out_dir.join(format!("{}.torrent", documents.title));
    match packager.package(folder, tracker_url, &torrent_path) {
        Ok(()) => {
            info!("created {}", torrent_path.display());
            report.torrent = true;
        }
        Err(e) => error!("packaging failed: {e}"),
    }

    report
}
