//! Station Statistics Library
//!
//! A Rust library for computing per-station minimum, mean, and maximum
//! readings from large `STATION;VALUE` measurement files.
//!
//! This library provides tools for:
//! - Memory-mapping a measurement file as a shared read-only byte region
//! - Splitting the region into line-aligned chunks, one per worker
//! - Single-pass byte-level scanning and aggregation of each chunk
//! - Associative merging of per-chunk partial results
//! - Deterministic sorted rendering of the final summary line

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod adapters {
        pub mod mapped_file;
    }
    pub mod services {
        pub mod aggregator;
        pub mod chunk_processor;
        pub mod chunker;
        pub mod reporter;
        pub mod summarizer;
        pub mod value_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ResultRow, StationAggregate, StationMap};
pub use config::Config;

/// Result type alias for summarizer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for measurement summarization
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A chunk worker failed to complete
    #[error("Chunk processing error: {message}")]
    ChunkProcessing { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a chunk processing error
    pub fn chunk_processing(message: impl Into<String>) -> Self {
        Self::ChunkProcessing {
            message: message.into(),
        }
    }
}

// Automatic conversion from bare I/O errors
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
