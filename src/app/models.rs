//! Data types for per-station aggregation
//!
//! The aggregate carries the four running values the summary needs. Merging
//! goes through a single associative, commutative combine operation so that
//! partial results from parallel chunks can be folded in any order or tree
//! shape with an identical final result.

use std::collections::HashMap;
use std::fmt;

/// Mapping from station name to its running aggregate
///
/// Each chunk worker produces one of these; the orchestrator folds them into
/// the final map after the worker hands it back.
pub type StationMap = HashMap<String, StationAggregate>;

/// Running min/max/sum/count summary for one station
///
/// Constructed from the first reading, never with a zero count. All later
/// mutation goes through [`StationAggregate::combine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationAggregate {
    /// Lowest reading observed
    pub min: f64,
    /// Highest reading observed
    pub max: f64,
    /// Sum of all readings
    pub sum: f64,
    /// Number of readings observed
    pub count: u64,
}

impl StationAggregate {
    /// Create an aggregate from a single reading
    pub fn of(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            sum: value,
            count: 1,
        }
    }

    /// Fold another aggregate into this one
    pub fn combine(&mut self, other: &StationAggregate) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
    }

    /// Arithmetic mean of all readings
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Presentational min/mean/max row, rounded to one decimal place
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl ResultRow {
    /// Derive the rendered row from a station's aggregate
    pub fn from_aggregate(aggregate: &StationAggregate) -> Self {
        Self {
            min: round_to_tenth(aggregate.min),
            mean: round_to_tenth(aggregate.mean()),
            max: round_to_tenth(aggregate.max),
        }
    }
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}/{:.1}/{:.1}", self.min, self.mean, self.max)
    }
}

/// Round to one decimal place, ties toward positive infinity
///
/// `1.25` rounds to `1.3` and `-1.25` rounds to `-1.2`.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
