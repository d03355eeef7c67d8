//! Memo encoding for attached transaction metadata.
//!
//! The ledger stores memo fields as uppercase hex of the UTF-8 bytes.

use escrow_types::{MemoEntry, MemoFields, MemoSpec};

/// Memo type used when the caller supplies a memo without a type.
pub const DEFAULT_MEMO_TYPE: &str = "escrow";

/// Encode a UTF-8 string to its uppercase hexadecimal representation.
/// The empty string encodes to the empty string.
pub fn encode(s: &str) -> String {
    hex::encode_upper(s.as_bytes())
}

/// Build the single ledger memo entry for a caller-supplied memo.
/// Type defaults to `"escrow"`, data defaults to empty.
pub fn memo_entry(spec: &MemoSpec) -> MemoEntry {
    let memo_type = spec.memo_type.as_deref().unwrap_or(DEFAULT_MEMO_TYPE);
    let memo_data = spec.data.as_deref().unwrap_or("");
    MemoEntry {
        memo: MemoFields {
            memo_type: encode(memo_type),
            memo_data: encode(memo_data),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uppercase_hex() {
        assert_eq!(encode("escrow"), "657363726F77");
        assert_eq!(encode("A"), "41");
    }

    #[test]
    fn test_empty_string_encodes_empty() {
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_round_trip_through_standard_decoder() {
        for s in ["hello", "escrow payment #42", "ünïcødé"] {
            let decoded = hex::decode(encode(s)).unwrap();
            assert_eq!(String::from_utf8(decoded).unwrap(), s);
        }
    }

    #[test]
    fn test_memo_entry_defaults() {
        let entry = memo_entry(&MemoSpec {
            memo_type: None,
            data: None,
        });
        assert_eq!(entry.memo.memo_type, encode("escrow"));
        assert_eq!(entry.memo.memo_data, "");
    }

    #[test]
    fn test_memo_entry_explicit_fields() {
        let entry = memo_entry(&MemoSpec {
            memo_type: Some("invoice".to_string()),
            data: Some("INV-1001".to_string()),
        });
        assert_eq!(entry.memo.memo_type, encode("invoice"));
        assert_eq!(entry.memo.memo_data, encode("INV-1001"));
    }
}
