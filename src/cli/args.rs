//! Command-line argument definitions for the station summarizer
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::DEFAULT_MEASUREMENTS_FILE;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the station statistics summarizer
///
/// Computes the minimum, mean, and maximum reading per station from a
/// semicolon-delimited measurement file and prints one sorted summary line.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "station_stats",
    version,
    about = "Summarize per-station min/mean/max readings from a measurement file",
    long_about = "Computes the minimum, mean, and maximum reading per station from a \
                  semicolon-delimited measurement file. The file is memory-mapped, split into \
                  line-aligned chunks, and scanned in parallel; the result is a single sorted \
                  summary line on stdout."
)]
pub struct Args {
    /// Path to the measurement file
    ///
    /// One record per line in the form STATION;VALUE.
    #[arg(
        value_name = "PATH",
        default_value = DEFAULT_MEASUREMENTS_FILE,
        help = "Path to the measurement file"
    )]
    pub path: PathBuf,

    /// Number of parallel workers
    ///
    /// Also the number of chunks the file is split into. Defaults to the
    /// number of available CPU cores.
    #[arg(
        short = 'w',
        long = "workers",
        value_name = "COUNT",
        help = "Number of parallel workers (default: available CPU cores)"
    )]
    pub workers: Option<usize>,

    /// Only log errors and suppress the progress bar
    #[arg(short = 'q', long = "quiet", help = "Only log errors, no progress bar")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", help = "Enable debug logging")]
    pub verbose: bool,
}

impl Args {
    /// Effective log level derived from the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Whether to draw the chunk progress bar
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
