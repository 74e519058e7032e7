//! Read-only memory-mapped view of the measurement file
//!
//! The operating system's mapping facility is consumed here as a capability:
//! a fixed-length byte region backed by the file, shareable across workers
//! without copying.

use crate::{Error, Result};
use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::Path;

/// Fixed-length read-only byte view of a file
///
/// Shared across all chunk workers behind an `Arc`; the mapping is released
/// when the last owner drops, on every exit path.
#[derive(Debug)]
pub struct MappedFile {
    map: Mmap,
}

impl MappedFile {
    /// Map `path` read-only
    ///
    /// Fails if the file cannot be opened or mapped. Zero-length files
    /// cannot be mapped on POSIX systems; callers short-circuit empty
    /// inputs before reaching this point.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| Error::io(format!("failed to open {}", path.display()), e))?;

        // Mapped read-only; the file must not be truncated by another
        // process while the mapping is alive.
        let map = unsafe { Mmap::map(&file) }
            .map_err(|e| Error::io(format!("failed to map {}", path.display()), e))?;

        Ok(Self { map })
    }

    /// Length of the mapped region in bytes
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the mapped region is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Raw bytes of the mapped region
    pub fn as_bytes(&self) -> &[u8] {
        &self.map
    }
}

impl Deref for MappedFile {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.map
    }
}
