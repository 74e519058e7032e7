//! Line-aligned chunk boundary computation
//!
//! Splits the mapped byte region into one range per worker. Boundaries are
//! pushed forward from the naive equal-size split points to the next line
//! terminator, so every range starts at the beginning of a line and no
//! record is split across two workers.

use crate::constants::LINE_TERMINATOR;
use std::ops::Range;

/// Split `data` into `chunk_count` line-aligned ranges
///
/// The ranges partition `[0, data.len())` with no gaps or overlaps, and
/// every interior boundary sits immediately after a line terminator (or at
/// the end of the data when no terminator remains). When several naive
/// split points land inside the same line, the ranges between them collapse
/// to zero length; the scanner treats those as empty chunks.
pub fn split_ranges(data: &[u8], chunk_count: usize) -> Vec<Range<usize>> {
    debug_assert!(chunk_count > 0);

    let len = data.len();
    let naive_size = len / chunk_count;

    let mut boundaries = Vec::with_capacity(chunk_count + 1);
    boundaries.push(0);
    for i in 1..chunk_count {
        let mut pos = naive_size * i;
        while pos < len && data[pos] != LINE_TERMINATOR {
            pos += 1;
        }
        // One past the terminator, clamped when the scan ran off the end.
        boundaries.push((pos + 1).min(len));
    }
    boundaries.push(len);

    boundaries.windows(2).map(|pair| pair[0]..pair[1]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[u8] = b"Hamburg;12.0\nBulawayo;8.9\nPalembang;38.8\nHamburg;34.2\n";

    /// Every range list must tile `[0, len)` contiguously.
    fn assert_partitions(data: &[u8], ranges: &[Range<usize>]) {
        assert_eq!(ranges.first().unwrap().start, 0);
        assert_eq!(ranges.last().unwrap().end, data.len());
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_single_chunk_covers_everything() {
        let ranges = split_ranges(SAMPLE, 1);
        assert_eq!(ranges, vec![0..SAMPLE.len()]);
    }

    #[test]
    fn test_ranges_partition_for_assorted_counts() {
        for chunk_count in 1..=8 {
            let ranges = split_ranges(SAMPLE, chunk_count);
            assert_eq!(ranges.len(), chunk_count);
            assert_partitions(SAMPLE, &ranges);
        }
    }

    #[test]
    fn test_interior_boundaries_follow_line_terminators() {
        for chunk_count in 2..=8 {
            let ranges = split_ranges(SAMPLE, chunk_count);
            for range in &ranges[1..] {
                let boundary = range.start;
                assert!(
                    boundary == SAMPLE.len() || SAMPLE[boundary - 1] == LINE_TERMINATOR,
                    "boundary {} does not follow a line terminator",
                    boundary
                );
            }
        }
    }

    #[test]
    fn test_split_points_inside_one_line_collapse_to_empty_ranges() {
        // One long record: every interior boundary lands past it.
        let data = b"Station With A Rather Long Name;25.0\n";
        let ranges = split_ranges(data, 4);

        assert_eq!(ranges.len(), 4);
        assert_partitions(data, &ranges);
        assert_eq!(ranges[0], 0..data.len());
        assert!(ranges[1..].iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_more_chunks_than_bytes() {
        let data = b"A;1.0\n";
        let ranges = split_ranges(data, 6);

        assert_eq!(ranges.len(), 6);
        assert_partitions(data, &ranges);
        assert_eq!(ranges.iter().filter(|r| !r.is_empty()).count(), 1);
    }

    #[test]
    fn test_missing_final_terminator_clamps_to_len() {
        let data = b"A;1.0\nB;2.0";
        let ranges = split_ranges(data, 2);

        assert_partitions(data, &ranges);
        assert_eq!(ranges[0], 0..6);
        assert_eq!(ranges[1], 6..data.len());
    }

    #[test]
    fn test_empty_input() {
        let ranges = split_ranges(b"", 3);
        assert_eq!(ranges.len(), 3);
        assert!(ranges.iter().all(|r| r.is_empty()));
    }
}
