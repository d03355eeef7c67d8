//! Unsigned transaction descriptor assembly.
//!
//! Builders validate domain requests and produce ledger-native
//! descriptors. All validation is local; fee, sequence and expiry
//! population is delegated to gateway autofill afterwards.

use crate::address;
use crate::error::{EscrowError, FieldError, Result};
use crate::memo;
use crate::time;
use escrow_types::{
    Amount, EscrowCancel, EscrowCancelRequest, EscrowCreate, EscrowCreateRequest, EscrowFinish,
    EscrowFinishRequest, EscrowTransaction, TxCommon,
};

/// Build an unsigned EscrowCreate descriptor.
///
/// `now_unix` anchors the "finishAfter must be in the future" check so
/// callers (and tests) control the clock.
pub fn build_create(req: &EscrowCreateRequest, now_unix: i64) -> Result<EscrowTransaction> {
    address::validate(&req.source_address)?;
    address::validate(&req.destination_address)?;

    let mut errors = Vec::new();

    if req.finish_after < now_unix {
        errors.push(FieldError::new(
            "finishAfter",
            "must not be in the past",
        ));
    }
    if let Some(cancel_after) = req.cancel_after {
        if cancel_after < req.finish_after {
            errors.push(FieldError::new(
                "cancelAfter",
                "must not precede finishAfter",
            ));
        }
    }
    if let Some(drops) = req.amount.as_drops() {
        if drops.is_empty() || !drops.bytes().all(|b| b.is_ascii_digit()) {
            errors.push(FieldError::new(
                "amount",
                "must be an integer drops string",
            ));
        }
    }

    let finish_after = ripple_time_field(req.finish_after, "finishAfter", &mut errors);
    let cancel_after = req
        .cancel_after
        .and_then(|t| ripple_time_field(t, "cancelAfter", &mut errors));

    if !errors.is_empty() {
        return Err(EscrowError::Validation(errors));
    }

    let mut common = TxCommon::new(req.source_address.clone());
    common.memos = req.memo.as_ref().map(|spec| vec![memo::memo_entry(spec)]);

    Ok(EscrowTransaction::EscrowCreate(EscrowCreate {
        common,
        destination: req.destination_address.clone(),
        amount: req.amount.clone(),
        finish_after,
        cancel_after,
        condition: req.condition.clone(),
    }))
}

/// Build an unsigned EscrowFinish descriptor.
pub fn build_finish(req: &EscrowFinishRequest) -> Result<EscrowTransaction> {
    address::validate(&req.owner_address)?;
    address::validate(&req.finisher_address)?;

    if req.fulfillment.is_some() && req.condition.is_none() {
        return Err(EscrowError::validation(
            "fulfillment",
            "requires a condition",
        ));
    }

    let mut common = TxCommon::new(req.finisher_address.clone());
    common.memos = req.memo.as_ref().map(|spec| vec![memo::memo_entry(spec)]);

    Ok(EscrowTransaction::EscrowFinish(EscrowFinish {
        common,
        owner: req.owner_address.clone(),
        offer_sequence: req.offer_sequence,
        condition: req.condition.clone(),
        fulfillment: req.fulfillment.clone(),
    }))
}

/// Build an unsigned EscrowCancel descriptor.
pub fn build_cancel(req: &EscrowCancelRequest) -> Result<EscrowTransaction> {
    address::validate(&req.owner_address)?;
    address::validate(&req.account_address)?;

    Ok(EscrowTransaction::EscrowCancel(EscrowCancel {
        common: TxCommon::new(req.account_address.clone()),
        owner: req.owner_address.clone(),
        offer_sequence: req.offer_sequence,
    }))
}

/// Convert a Unix timestamp to a u32 ripple-epoch field, recording a
/// field error when out of the ledger's range.
fn ripple_time_field(unix: i64, field: &str, errors: &mut Vec<FieldError>) -> Option<u32> {
    match u32::try_from(time::to_ripple_epoch(unix)) {
        Ok(t) => Some(t),
        Err(_) => {
            errors.push(FieldError::new(field, "outside the ledger's time range"));
            None
        }
    }
}
