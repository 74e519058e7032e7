//! Merging of per-chunk partial results
//!
//! Partial maps arrive from workers in completion order, which is not
//! deterministic. Both operations here are associative and commutative (up
//! to floating-point wobble in the last bits of `sum`), so the fold produces
//! the same summary regardless of that order; the rendered output rounds to
//! one decimal and absorbs the wobble.

use crate::app::models::StationMap;

/// Fold `partial` into `target` key by key
///
/// Stations absent from one side pass through unchanged; shared stations
/// are combined with the aggregate rule.
pub fn merge_into(target: &mut StationMap, partial: StationMap) {
    for (station, aggregate) in partial {
        match target.get_mut(&station) {
            Some(existing) => existing.combine(&aggregate),
            None => {
                target.insert(station, aggregate);
            }
        }
    }
}

/// Fold a collection of partial results into a single map
pub fn merge_partials(partials: Vec<StationMap>) -> StationMap {
    let mut merged = StationMap::new();
    for partial in partials {
        merge_into(&mut merged, partial);
    }
    merged
}
