//! Sorted textual rendering of the final summary
//!
//! Produces the single line the program prints: every station with its
//! rounded min/mean/max, sorted by key, inside braces.

use crate::app::models::{ResultRow, StationMap};
use crate::constants::ROW_SEPARATOR;

/// Render the final `{A=min/mean/max, B=min/mean/max, ...}` line
///
/// Stations are sorted ascending by their textual key (byte order, which is
/// also UTF-8 code point order). An empty map renders `{}`.
pub fn render_report(stations: &StationMap) -> String {
    let mut entries: Vec<_> = stations.iter().collect();
    entries.sort_by(|left, right| left.0.cmp(right.0));

    let rows: Vec<String> = entries
        .iter()
        .map(|(station, aggregate)| format!("{}={}", station, ResultRow::from_aggregate(aggregate)))
        .collect();

    format!("{{{}}}", rows.join(ROW_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::StationAggregate;

    fn map_of(entries: &[(&str, &[f64])]) -> StationMap {
        let mut map = StationMap::new();
        for &(station, values) in entries {
            let mut aggregate = StationAggregate::of(values[0]);
            for &value in &values[1..] {
                aggregate.combine(&StationAggregate::of(value));
            }
            map.insert(station.to_string(), aggregate);
        }
        map
    }

    #[test]
    fn test_renders_sorted_rows() {
        let map = map_of(&[("B", &[2.0]), ("A", &[1.0, 3.0])]);
        assert_eq!(render_report(&map), "{A=1.0/2.0/3.0, B=2.0/2.0/2.0}");
    }

    #[test]
    fn test_empty_map_renders_braces() {
        assert_eq!(render_report(&StationMap::new()), "{}");
    }

    #[test]
    fn test_single_station() {
        let map = map_of(&[("Nuuk", &[-10.5])]);
        assert_eq!(render_report(&map), "{Nuuk=-10.5/-10.5/-10.5}");
    }

    #[test]
    fn test_mean_rounds_half_up() {
        // 22.4 and 22.5 average to 22.45, which rounds up to 22.5.
        let map = map_of(&[("Abha", &[22.4, 22.5])]);
        assert_eq!(render_report(&map), "{Abha=22.4/22.5/22.5}");
    }

    #[test]
    fn test_multibyte_names_sort_after_ascii() {
        // Byte order: 'Z' < 'a' < 0xC3, the first byte of 'Ü'.
        let map = map_of(&[("Zagreb", &[1.0]), ("Ürümqi", &[2.0]), ("aalborg", &[3.0])]);
        assert_eq!(
            render_report(&map),
            "{Zagreb=1.0/1.0/1.0, aalborg=3.0/3.0/3.0, Ürümqi=2.0/2.0/2.0}"
        );
    }
}
