//! Conversion between Unix time and the ledger's ripple epoch.
//!
//! The XRP Ledger counts seconds from 2000-01-01T00:00:00Z. Both
//! directions are pure integer shifts and round-trip exactly.

/// Seconds between the Unix epoch and the ripple epoch
/// (2000-01-01T00:00:00Z).
pub const RIPPLE_EPOCH_OFFSET: i64 = 946_684_800;

/// Unix seconds to ripple epoch seconds.
pub fn to_ripple_epoch(unix_seconds: i64) -> i64 {
    unix_seconds - RIPPLE_EPOCH_OFFSET
}

/// Ripple epoch seconds back to Unix seconds. Exact inverse of
/// `to_ripple_epoch`.
pub fn from_ripple_epoch(ripple_seconds: i64) -> i64 {
    ripple_seconds + RIPPLE_EPOCH_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_boundary() {
        // 2000-01-01T00:00:00Z is zero on the ledger clock.
        assert_eq!(to_ripple_epoch(946_684_800), 0);
        assert_eq!(from_ripple_epoch(0), 946_684_800);
    }

    #[test]
    fn test_round_trip() {
        for t in [0_i64, 1, -1, 946_684_800, 1_700_000_000, i64::MAX / 2] {
            assert_eq!(from_ripple_epoch(to_ripple_epoch(t)), t);
            assert_eq!(to_ripple_epoch(from_ripple_epoch(t)), t);
        }
    }

    #[test]
    fn test_known_conversion() {
        // 2023-11-14T22:13:20Z
        assert_eq!(to_ripple_epoch(1_700_000_000), 753_315_200);
    }
}
