//! Classic address validation and account-ID decoding.
//!
//! An XRPL classic address is base58 over the ripple alphabet,
//! carrying a 0x00 type prefix, a 20-byte account ID and a 4-byte
//! double-SHA256 checksum. Validation here is purely structural and
//! runs before any network call.

use crate::error::{EscrowError, Result};

/// Length of a decoded account ID.
pub const ACCOUNT_ID_LEN: usize = 20;

/// Type prefix for account IDs (yields the leading `r`).
const ACCOUNT_ID_PREFIX: u8 = 0x00;

/// Decode a classic address into its 20-byte account ID, verifying
/// alphabet, prefix and checksum.
pub fn decode_account_id(address: &str) -> Result<[u8; ACCOUNT_ID_LEN]> {
    let bytes = bs58::decode(address)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .with_check(Some(ACCOUNT_ID_PREFIX))
        .into_vec()
        .map_err(|_| EscrowError::InvalidAddress(address.to_string()))?;

    // with_check keeps the version byte at index 0
    if bytes.len() != ACCOUNT_ID_LEN + 1 {
        return Err(EscrowError::InvalidAddress(address.to_string()));
    }

    let mut id = [0u8; ACCOUNT_ID_LEN];
    id.copy_from_slice(&bytes[1..]);
    Ok(id)
}

/// Structural validity check for a classic address.
pub fn validate(address: &str) -> Result<()> {
    decode_account_id(address).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known ledger addresses with valid checksums.
    const GENESIS: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    const ACCOUNT_ZERO: &str = "rrrrrrrrrrrrrrrrrrrrrhoLvTp";
    const ACCOUNT_ONE: &str = "rrrrrrrrrrrrrrrrrrrrBZbvji";

    #[test]
    fn test_valid_addresses_decode() {
        assert!(validate(GENESIS).is_ok());
        assert_eq!(decode_account_id(ACCOUNT_ZERO).unwrap(), [0u8; 20]);

        let mut one = [0u8; 20];
        one[19] = 1;
        assert_eq!(decode_account_id(ACCOUNT_ONE).unwrap(), one);
    }

    #[test]
    fn test_malformed_addresses_rejected() {
        for bad in ["", "invalid", "xHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh", "r0OIl"] {
            assert!(matches!(
                validate(bad),
                Err(EscrowError::InvalidAddress(_))
            ));
        }
    }

    #[test]
    fn test_checksum_flip_rejected() {
        // Flip the final character of a valid address.
        let mut s = GENESIS.to_string();
        s.pop();
        s.push('4');
        assert!(validate(&s).is_err());
    }

    #[test]
    fn test_account_id_ordering_matches_byte_order() {
        let zero = decode_account_id(ACCOUNT_ZERO).unwrap();
        let one = decode_account_id(ACCOUNT_ONE).unwrap();
        assert!(zero < one);
    }
}
