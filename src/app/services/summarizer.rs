//! Parallel summarization pipeline
//!
//! Drives the end-to-end run: maps the input file, splits it into
//! line-aligned chunks, scans the chunks on the blocking thread pool, and
//! folds each partial result into the final map as workers complete. The
//! mapped region is shared read-only across workers and released when the
//! last owner drops.

use crate::app::adapters::mapped_file::MappedFile;
use crate::app::models::StationMap;
use crate::app::services::{aggregator, chunk_processor, chunker, reporter};
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

/// Parallel summarizer over a memory-mapped measurement file
pub struct SummaryProcessor {
    config: Arc<Config>,
}

/// Final report line plus run statistics
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    /// The rendered summary line destined for stdout
    pub report: String,
    /// Statistics describing the run
    pub stats: SummaryStats,
}

/// Statistics for a summarization run
#[derive(Debug, Clone, Default)]
pub struct SummaryStats {
    /// Number of chunks whose results made it into the merge
    pub chunks_processed: usize,
    /// Number of chunks dropped because their worker failed
    pub chunks_failed: usize,
    /// Number of distinct stations in the final summary
    pub stations: usize,
    /// Total readings aggregated across all stations
    pub readings: u64,
    /// Size of the scanned input in bytes
    pub bytes_scanned: u64,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl SummaryStats {
    /// Share of chunks that completed, as a percentage
    pub fn success_rate(&self) -> f64 {
        let total = self.chunks_processed + self.chunks_failed;
        if total == 0 {
            100.0
        } else {
            (self.chunks_processed as f64 / total as f64) * 100.0
        }
    }

    /// Whether every chunk contributed to the merge
    pub fn is_complete(&self) -> bool {
        self.chunks_failed == 0
    }

    /// Readings aggregated per second
    pub fn readings_per_second(&self) -> f64 {
        if self.processing_time.as_secs_f64() > 0.0 {
            self.readings as f64 / self.processing_time.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Human-readable summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Summary complete: {} stations from {} readings ({} bytes) | \
             chunks: {} merged, {} dropped ({:.1}% success) | \
             {:.2}s ({:.0} readings/sec)",
            self.stations,
            self.readings,
            self.bytes_scanned,
            self.chunks_processed,
            self.chunks_failed,
            self.success_rate(),
            self.processing_time.as_secs_f64(),
            self.readings_per_second()
        )
    }
}

impl SummaryProcessor {
    /// Create a new processor over a validated configuration
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Run the full pipeline and produce the report line plus statistics
    ///
    /// A failed chunk worker is logged and its contribution dropped from the
    /// merge; the run still reports whatever the remaining chunks produced.
    /// Only failures to open or map the input abort the run.
    pub async fn run(&self, show_progress: bool) -> Result<SummaryOutcome> {
        let start_time = Instant::now();
        let input_path = &self.config.processing.input_path;

        if !input_path.exists() {
            return Err(Error::file_not_found(input_path.display().to_string()));
        }

        let file_len = std::fs::metadata(input_path)
            .map_err(|e| Error::io(format!("failed to stat {}", input_path.display()), e))?
            .len();

        // An empty file has a well-defined summary and cannot be mapped.
        if file_len == 0 {
            info!("Input file {} is empty", input_path.display());
            return Ok(SummaryOutcome {
                report: reporter::render_report(&StationMap::new()),
                stats: SummaryStats {
                    processing_time: start_time.elapsed(),
                    ..Default::default()
                },
            });
        }

        let mapped = Arc::new(MappedFile::open(input_path)?);

        let chunk_count = self
            .config
            .performance
            .parallel_workers
            .min(mapped.len())
            .max(1);
        let ranges = chunker::split_ranges(mapped.as_bytes(), chunk_count);

        info!(
            "Processing {} ({} bytes) with {} chunks",
            input_path.display(),
            mapped.len(),
            ranges.len()
        );

        let progress_bar = if show_progress {
            Some(create_progress_bar(ranges.len() as u64))
        } else {
            None
        };

        let mut workers: JoinSet<StationMap> = JoinSet::new();
        for range in ranges {
            let mapped = Arc::clone(&mapped);
            workers.spawn_blocking(move || chunk_processor::process_chunk(&mapped.as_bytes()[range]));
        }

        // Workers return exclusively-owned partial maps; the fold below is
        // the only writer of the final map, so no synchronization is needed.
        let mut merged = StationMap::new();
        let mut stats = SummaryStats {
            bytes_scanned: file_len,
            ..Default::default()
        };

        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(partial) => {
                    debug!("Chunk completed with {} stations", partial.len());
                    aggregator::merge_into(&mut merged, partial);
                    stats.chunks_processed += 1;
                }
                Err(e) => {
                    // The failed chunk's readings are dropped; the summary
                    // still covers every chunk that completed.
                    let failure = Error::chunk_processing(e.to_string());
                    error!("Chunk worker failed, dropping its readings: {}", failure);
                    stats.chunks_failed += 1;
                }
            }
            if let Some(pb) = &progress_bar {
                pb.inc(1);
            }
        }

        if let Some(pb) = &progress_bar {
            pb.finish_with_message(format!(
                "Merged {} chunks, {} dropped",
                stats.chunks_processed, stats.chunks_failed
            ));
        }

        stats.stations = merged.len();
        stats.readings = merged.values().map(|aggregate| aggregate.count).sum();
        stats.processing_time = start_time.elapsed();

        Ok(SummaryOutcome {
            report: reporter::render_report(&merged),
            stats,
        })
    }
}

/// Progress bar over chunk completions, drawn on stderr
fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("Scanning chunks...");
    pb
}
