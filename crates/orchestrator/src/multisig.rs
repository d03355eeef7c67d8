//! Multisig detection and multisigned-payload assembly.
//!
//! Detection asks the ledger for the account's signer list; assembly
//! turns collected signature packets into the ledger's `Signers`
//! array. Signer entries are sorted ascending by decoded account ID
//! before submission, the canonical order rippled requires.

use crate::address;
use crate::error::{EscrowError, Result};
use escrow_types::{EscrowTransaction, SignaturePacket, SignerEntry, SignerFields, SignerListQuorum};
use escrow_xrpl::LedgerGateway;
use tracing::debug;

/// Query the account's signer list. `Some(quorum)` means the account
/// can only act through multisig.
pub async fn detect<G: LedgerGateway>(
    gateway: &G,
    account: &str,
) -> Result<Option<SignerListQuorum>> {
    let quorum = gateway.signer_list(account).await?;
    if let Some(ref q) = quorum {
        debug!(
            "Account {} requires multisig ({} signers, quorum {})",
            account,
            q.signer_count(),
            q.quorum
        );
    }
    Ok(quorum)
}

/// Combine an unsigned descriptor with collected signatures into a
/// submittable multisigned descriptor.
///
/// The `SigningPubKey` field is forced empty: a transaction is signed
/// with either a signing key or a signer list, never both.
pub fn assemble(
    mut tx: EscrowTransaction,
    signatures: &[SignaturePacket],
) -> Result<EscrowTransaction> {
    if signatures.is_empty() {
        return Err(EscrowError::EmptySignatureSet);
    }

    let mut keyed: Vec<([u8; address::ACCOUNT_ID_LEN], SignerEntry)> = signatures
        .iter()
        .map(|packet| {
            let account_id = address::decode_account_id(&packet.signer_address)?;
            Ok((
                account_id,
                SignerEntry {
                    signer: SignerFields {
                        account: packet.signer_address.clone(),
                        txn_signature: packet.signature.clone(),
                        signing_pub_key: packet.signer_public_key.clone(),
                    },
                },
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    // Canonical order: ascending by decoded account ID.
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let common = tx.common_mut();
    common.signers = Some(keyed.into_iter().map(|(_, entry)| entry).collect());
    common.signing_pub_key = Some(String::new());

    Ok(tx)
}
