//! Fixed-format decimal parsing over raw bytes
//!
//! Readings match `-?[0-9]+\.[0-9]+`. The parser works directly on the
//! mapped bytes with integer accumulation instead of going through a
//! general-purpose text-to-float conversion, keeping the hot loop free of
//! allocation and UTF-8 handling.

/// Parse a `-?[0-9]+\.[0-9]+` token into a 64-bit float
///
/// Single left-to-right scan: optional sign, integer digits accumulated as
/// `i * 10 + d`, then decimal digits accumulated the same way while counting
/// places; the result is `int + dec / 10^places`, negated on sign. No
/// validation is performed; bytes outside the expected format produce an
/// unspecified numeric value rather than an error or a panic.
pub fn parse_fixed_decimal(bytes: &[u8]) -> f64 {
    let mut pos = 0;
    let negative = bytes.first() == Some(&b'-');
    if negative {
        pos = 1;
    }

    let mut int_part: i64 = 0;
    while pos < bytes.len() && bytes[pos] != b'.' {
        int_part = int_part
            .wrapping_mul(10)
            .wrapping_add(i64::from(bytes[pos].wrapping_sub(b'0')));
        pos += 1;
    }

    let mut decimal_part: i64 = 0;
    let mut decimal_places: i32 = 0;
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        while pos < bytes.len() {
            decimal_part = decimal_part
                .wrapping_mul(10)
                .wrapping_add(i64::from(bytes[pos].wrapping_sub(b'0')));
            decimal_places += 1;
            pos += 1;
        }
    }

    let value = int_part as f64 + decimal_part as f64 / 10f64.powi(decimal_places);
    if negative { -value } else { value }
}
