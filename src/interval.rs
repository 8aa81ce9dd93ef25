//! Interval modifier bitmask decoder.
//!
//! `typmod` on an `interval` column encodes a range of fields as a bitmask
//! in its low bits, following `INTERVAL_MASK(x)` from the PostgreSQL source:
//! bit `x` is set for each field `x` in `{YEAR, MONTH, DAY, HOUR, MINUTE,
//! SECOND, ...}`, where field indices match `datetime.h`.

const YEAR: i32 = 1 << 2;
const MONTH: i32 = 1 << 1;
const DAY: i32 = 1 << 3;
const HOUR: i32 = 1 << 10;
const MINUTE: i32 = 1 << 11;
const SECOND: i32 = 1 << 12;

/// Decodes an interval typmod bitmask into its textual qualifier, e.g.
/// `"day to minute"`. Returns `""` for unrecognized or all-zero masks.
pub fn decode(mask: i32) -> &'static str {
    match mask {
        m if m == YEAR => "year",
        m if m == MONTH => "month",
        m if m == DAY => "day",
        m if m == HOUR => "hour",
        m if m == MINUTE => "minute",
        m if m == SECOND => "second",
        m if m == YEAR | MONTH => "year to month",
        m if m == DAY | HOUR => "day to hour",
        m if m == DAY | HOUR | MINUTE => "day to minute",
        m if m == DAY | HOUR | MINUTE | SECOND => "day to second",
        m if m == HOUR | MINUTE => "hour to minute",
        m if m == HOUR | MINUTE | SECOND => "hour to second",
        m if m == MINUTE | SECOND => "minute to second",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_units() {
        assert_eq!(decode(YEAR), "year");
        assert_eq!(decode(MONTH), "month");
        assert_eq!(decode(SECOND), "second");
    }

    #[test]
    fn recognized_combinations() {
        assert_eq!(decode(YEAR | MONTH), "year to month");
        assert_eq!(decode(DAY | HOUR), "day to hour");
        assert_eq!(decode(DAY | HOUR | MINUTE), "day to minute");
        assert_eq!(decode(DAY | HOUR | MINUTE | SECOND), "day to second");
        assert_eq!(decode(HOUR | MINUTE), "hour to minute");
        assert_eq!(decode(HOUR | MINUTE | SECOND), "hour to second");
        assert_eq!(decode(MINUTE | SECOND), "minute to second");
    }

    #[test]
    fn unrecognized_mask_is_empty() {
        assert_eq!(decode(0), "");
        assert_eq!(decode(YEAR | DAY), "");
    }
}
