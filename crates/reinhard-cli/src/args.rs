//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Recolor an image so its color statistics match another image.
#[derive(Debug, Parser)]
#[command(name = "reinhard", version, about)]
pub struct Cli {
    /// Image whose structure is kept.
    pub source: PathBuf,

    /// Image whose color statistics are imposed on the source.
    pub target: PathBuf,

    /// Where to write the recolored image. The extension picks the format.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Round to the nearest code value instead of truncating.
    #[arg(long)]
    pub round: bool,

    /// JSON file with transfer settings.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the measured lαβ statistics as JSON on stdout.
    #[arg(long)]
    pub report: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}
