//! Single-pass chunk scanning and aggregation
//!
//! Each worker runs this scanner over its own line-aligned byte range and
//! returns an exclusively-owned partial result. No shared state is touched;
//! merging happens on the orchestrator side after the hand-off.

use crate::app::models::{StationAggregate, StationMap};
use crate::app::services::value_parser::parse_fixed_decimal;
use crate::constants::{FIELD_DELIMITER, LINE_TERMINATOR};

/// Scan one line-aligned chunk and aggregate its readings per station
///
/// `chunk` must start at a line boundary and end immediately after a line
/// terminator (or be empty); the chunker guarantees both, so no trailing
/// partial line arises. The station key is borrowed for lookup and
/// allocated only on its first insertion into the map.
pub fn process_chunk(chunk: &[u8]) -> StationMap {
    let mut stations = StationMap::new();

    let mut line_start = 0;
    let mut delimiter: Option<usize> = None;

    for (index, &byte) in chunk.iter().enumerate() {
        if byte == FIELD_DELIMITER {
            delimiter = Some(index);
        } else if byte == LINE_TERMINATOR {
            // A line without a delimiter carries no reading.
            if let Some(split) = delimiter.take() {
                let name = &chunk[line_start..split];
                let value = parse_fixed_decimal(&chunk[split + 1..index]);
                record_reading(&mut stations, name, value);
            }
            line_start = index + 1;
        }
    }

    stations
}

/// Fold one reading into the chunk's map via the associative combine rule
fn record_reading(stations: &mut StationMap, name: &[u8], value: f64) {
    let reading = StationAggregate::of(value);
    let key = String::from_utf8_lossy(name);
    match stations.get_mut(key.as_ref()) {
        Some(aggregate) => aggregate.combine(&reading),
        None => {
            stations.insert(key.into_owned(), reading);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_aggregates_repeated_stations() {
        let stations = process_chunk(b"A;1.0\nB;2.0\nA;3.0\n");

        assert_eq!(stations.len(), 2);

        let a = &stations["A"];
        assert_eq!(a.min, 1.0);
        assert_eq!(a.max, 3.0);
        assert_eq!(a.count, 2);
        assert!((a.sum - 4.0).abs() < TOLERANCE);

        let b = &stations["B"];
        assert_eq!(b.min, 2.0);
        assert_eq!(b.max, 2.0);
        assert_eq!(b.count, 1);
    }

    #[test]
    fn test_negative_readings() {
        let stations = process_chunk(b"Yakutsk;-40.2\nYakutsk;-0.1\n");

        let yakutsk = &stations["Yakutsk"];
        assert_eq!(yakutsk.min, -40.2);
        assert_eq!(yakutsk.max, -0.1);
        assert_eq!(yakutsk.count, 2);
    }

    #[test]
    fn test_empty_chunk_yields_empty_map() {
        assert!(process_chunk(b"").is_empty());
    }

    #[test]
    fn test_station_names_may_contain_spaces_and_punctuation() {
        let stations = process_chunk(b"St. John's;15.2\nPalmerston North;23.2\n");

        assert!(stations.contains_key("St. John's"));
        assert!(stations.contains_key("Palmerston North"));
    }

    #[test]
    fn test_multibyte_station_names() {
        let stations = process_chunk("Zürich;8.5\nÜrümqi;7.4\n".as_bytes());

        assert_eq!(stations["Zürich"].count, 1);
        assert_eq!(stations["Ürümqi"].count, 1);
    }

    #[test]
    fn test_line_without_delimiter_is_skipped() {
        let stations = process_chunk(b"not a record\nA;1.0\n");

        assert_eq!(stations.len(), 1);
        assert_eq!(stations["A"].count, 1);
    }

    #[test]
    fn test_split_scan_matches_whole_scan() {
        let data: &[u8] = b"A;1.0\nB;2.0\nA;3.0\nC;-4.5\nB;0.1\n";
        let whole = process_chunk(data);

        // Any line-aligned split must aggregate to the same per-station totals.
        let split_at = 12; // after "A;1.0\nB;2.0\n"
        let mut merged = process_chunk(&data[..split_at]);
        for (station, aggregate) in process_chunk(&data[split_at..]) {
            match merged.get_mut(&station) {
                Some(existing) => existing.combine(&aggregate),
                None => {
                    merged.insert(station, aggregate);
                }
            }
        }

        assert_eq!(whole.len(), merged.len());
        for (station, aggregate) in &whole {
            let other = &merged[station];
            assert_eq!(aggregate.min, other.min);
            assert_eq!(aggregate.max, other.max);
            assert_eq!(aggregate.count, other.count);
            assert!((aggregate.sum - other.sum).abs() < TOLERANCE);
        }
    }
}
