//! Configuration management and validation
//!
//! Provides configuration structures for the summarization run: where to
//! read measurements from and how many parallel workers to use.

use crate::constants::{DEFAULT_MEASUREMENTS_FILE, default_worker_count};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input handling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Path to the measurement file
    pub input_path: PathBuf,
}

/// Parallelism configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Number of worker tasks, which is also the number of chunks the file
    /// is split into
    pub parallel_workers: usize,
}

/// Global configuration for a summarization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input handling settings
    pub processing: ProcessingConfig,
    /// Parallelism settings
    pub performance: PerformanceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig {
                input_path: PathBuf::from(DEFAULT_MEASUREMENTS_FILE),
            },
            performance: PerformanceConfig {
                parallel_workers: default_worker_count(),
            },
        }
    }
}

impl Config {
    /// Create a configuration for the given input file with default
    /// parallelism
    pub fn new(input_path: PathBuf) -> Self {
        Self {
            processing: ProcessingConfig { input_path },
            ..Default::default()
        }
    }

    /// Validate the configuration before starting a run
    pub fn validate(&self) -> Result<()> {
        if self.performance.parallel_workers == 0 {
            return Err(Error::configuration(
                "parallel_workers must be at least 1",
            ));
        }
        Ok(())
    }
}
