mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tf_av::{MediaInfoProber, MktorrentPackager, ToolRegistry};
use tf_core::Config;
use torrentforge::pipeline;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise use defaults based on the
    // verbose flag.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "torrentforge=trace,tf_analyze=trace,tf_media=trace,tf_render=trace,tf_av=debug"
                .to_string()
        } else {
            "torrentforge=info,tf_av=info".to_string()
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    let config = Config::load_or_default(cli.config.as_deref());
    let tracker_url = cli
        .tracker
        .unwrap_or_else(|| config.torrent.tracker_url.clone());

    let registry = ToolRegistry::discover(&config.tools);
    for info in registry.check_all() {
        tracing::debug!("tool {}: available={}", info.name, info.available);
    }

    // Probing is fatal when unavailable, so require mediainfo up front.
    let prober = MediaInfoProber::new(registry.require("mediainfo")?.clone());

    // A missing mktorrent only fails the packaging stage; the documents
    // are still written. Let the spawn report the failure in that case.
    let mktorrent = registry
        .require("mktorrent")
        .map(|p| p.clone())
        .unwrap_or_else(|e| {
            tracing::warn!("{e}");
            PathBuf::from("mktorrent")
        });
    let packager = MktorrentPackager::new(mktorrent, config.torrent.piece_length);

    let out_dir = std::env::current_dir()?;
    let report = pipeline::run(&cli.folder, &tracker_url, &prober, &packager, &out_dir)?;

    if report.all_ok() {
        println!("All files created successfully");
        Ok(())
    } else {
        println!("Some stages failed; check the log output above");
        std::process::exit(1);
    }
}
