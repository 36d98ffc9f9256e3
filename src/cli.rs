use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "repro")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Play the mp3 files found under a directory")]
pub struct Cli {
    /// Directory to scan for music (defaults to `library.root`, then ~/Music)
    pub dir: Option<PathBuf>,

    /// Write the log here instead of the configured/default location
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
