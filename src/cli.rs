use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "torrentforge")]
#[command(author, version, about = "Create a torrent, NFO, and BBCode description from a media folder")]
pub struct Cli {
    /// Media folder to process
    pub folder: PathBuf,

    /// Tracker announce URL (defaults to the configured placeholder)
    #[arg(short, long)]
    pub tracker: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
