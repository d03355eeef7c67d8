//! Escrow Transaction Orchestration
//!
//! This crate is the core of the escrow service: it translates
//! domain-level escrow requests into ledger-native transaction
//! descriptors, detects multisig accounts and assembles multisigned
//! payloads, converts between the caller's Unix timestamps and the
//! ledger's ripple epoch, and maps ledger responses back into a
//! stable domain status model.
//!
//! It never signs anything. Descriptors go back to the caller
//! unsigned; signed blobs and signature sets come back in through
//! `submit` / `submit_multisigned`.

pub mod address;
pub mod builder;
pub mod error;
pub mod memo;
pub mod multisig;
pub mod service;
pub mod status;
pub mod submission;
pub mod time;

pub use error::{EscrowError, FieldError, Result};
pub use service::EscrowOrchestrator;
pub use submission::ENGINE_SUCCESS;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{EscrowError, FieldError, Result};
    pub use crate::service::EscrowOrchestrator;
    pub use escrow_types::{
        EscrowCancelRequest, EscrowCreateRequest, EscrowFinishRequest, EscrowStatus,
        PreparedTransaction, SignaturePacket, SubmissionResult,
    };
}
