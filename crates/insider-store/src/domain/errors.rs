//! # Error Taxonomy
//!
//! One error enumeration for the core plus small per-collaborator enums
//! converted at the service boundary.
//!
//! Propagation policy: enumeration and read paths recover locally and
//! degrade to empty/partial results; mutation paths (create, verify,
//! reject, decrypt) surface failures to the caller.

use shared_types::{Identity, RecordId, RecordStatus};
use thiserror::Error;

/// Errors surfaced by the record store, access gate, and workflow engine.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The ledger is unreachable or reported itself unavailable.
    #[error("Ledger unavailable: {0}")]
    LedgerUnavailable(String),

    /// Stored bytes under a key failed to deserialize.
    #[error("Malformed data under {key}: {message}")]
    ParseFailure { key: String, message: String },

    /// The acting identity is not the record owner.
    #[error("{actor} is not the owner of record {id}")]
    Unauthorized { id: RecordId, actor: Identity },

    /// The record status is already terminal.
    #[error("Record {id} is already {status}")]
    InvalidTransition { id: RecordId, status: RecordStatus },

    /// The signer declined or failed the signature challenge.
    #[error("Signature challenge declined")]
    SignerDeclined,

    /// The operation targets a nonexistent record id.
    #[error("Record not found: {0}")]
    NotFound(RecordId),
}

/// Ledger collaborator failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The ledger reports itself unavailable.
    #[error("Ledger reports unavailable")]
    Unavailable,

    /// A read or write failed.
    #[error("Ledger I/O failed: {message}")]
    Io { message: String },

    /// A conditional write lost against a concurrent writer.
    ///
    /// Reserved for versioned/conditional-write backends; the bundled
    /// adapters never return it.
    #[error("Write conflict on {key}")]
    WriteConflict { key: String },
}

/// Signer collaborator failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignerError {
    /// The user or caller refused the signature request.
    #[error("Signature request declined")]
    Declined,

    /// The signing call itself failed.
    #[error("Signer failed: {message}")]
    Failed { message: String },
}

impl From<LedgerError> for StoreError {
    fn from(err: LedgerError) -> Self {
        StoreError::LedgerUnavailable(err.to_string())
    }
}

impl From<SignerError> for StoreError {
    fn from(_: SignerError) -> Self {
        // Decline and failure gate identically: the plaintext stays hidden
        // and the gate does not retry.
        StoreError::SignerDeclined
    }
}
