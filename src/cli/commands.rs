//! Command implementation for the summarizer CLI
//!
//! Contains the main execution logic: logging setup, configuration
//! assembly, driving the parallel summarizer, and printing the result.

use crate::Result;
use crate::app::services::summarizer::{SummaryProcessor, SummaryStats};
use crate::cli::args::Args;
use crate::config::Config;
use std::sync::Arc;
use tracing::{debug, info};

/// Main command runner for the station summarizer
///
/// This function orchestrates the workflow:
/// 1. Set up logging
/// 2. Build and validate the configuration
/// 3. Summarize the measurement file in parallel
/// 4. Print the summary line to stdout and log run statistics
pub async fn run(args: Args) -> Result<SummaryStats> {
    setup_logging(&args)?;

    info!("Starting station summarizer");
    debug!("Command line arguments: {:?}", args);

    let config = load_configuration(&args);
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    let processor = SummaryProcessor::new(Arc::new(config));
    let outcome = processor.run(args.show_progress()).await?;

    // The summary is the program's only stdout output.
    println!("{}", outcome.report);

    info!("{}", outcome.stats.summary());

    Ok(outcome.stats)
}

/// Build the run configuration from CLI arguments
fn load_configuration(args: &Args) -> Config {
    let mut config = Config::new(args.path.clone());
    if let Some(workers) = args.workers {
        config.performance.parallel_workers = workers;
    }
    config
}

/// Set up structured logging on stderr
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("station_stats={}", args.log_level())));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", args.log_level());
    Ok(())
}
