//! # Inbound Ports (Driving Ports)
//!
//! The operations callers drive this crate through.

use crate::domain::entities::InsiderRecord;
use crate::domain::errors::StoreError;
use crate::session::SessionContext;
use async_trait::async_trait;
use shared_types::{DataCategory, Identity, RecordId};

/// Single-record mutation applied inside a read-modify-write cycle.
///
/// Only `status` is mutable post-creation; the workflow engine is the sole
/// in-tree caller.
pub type Mutator = Box<dyn FnOnce(&mut InsiderRecord) + Send>;

/// CRUD over individual records.
#[async_trait]
pub trait RecordStoreApi: Send + Sync {
    /// Create a record: mint an id, encode the plaintext, write the record
    /// under its own key, then append the id to the index.
    ///
    /// Fails with [`StoreError::LedgerUnavailable`] if either write fails;
    /// the id is not discoverable until both writes succeed.
    async fn create(
        &self,
        owner: Identity,
        company: String,
        category: DataCategory,
        plaintext: f64,
    ) -> Result<RecordId, StoreError>;

    /// Read one record. Missing key or malformed content yields `None`
    /// (malformed content is logged, never propagated on this path).
    async fn get(&self, id: &str) -> Result<Option<InsiderRecord>, StoreError>;

    /// Enumerate all records via the index, most recent first (stable
    /// tie-break on index order). Records that fail to parse are dropped;
    /// ledger unavailability short-circuits to an empty list.
    async fn list(&self) -> Result<Vec<InsiderRecord>, StoreError>;

    /// Read-modify-write one record. Fails with [`StoreError::NotFound`]
    /// when the id has no backing record; malformed stored bytes surface as
    /// [`StoreError::ParseFailure`] on this mutation path.
    async fn update(&self, id: &str, mutate: Mutator) -> Result<InsiderRecord, StoreError>;
}

/// Signature-gated decryption.
#[async_trait]
pub trait AccessGateApi: Send + Sync {
    /// Build the canonical challenge, obtain a signature over it, and only
    /// then decode the record's payload. The signature is a liveness gate
    /// proving current control of the owning identity, not key material;
    /// decoding takes nothing from it.
    ///
    /// Signer decline or failure yields [`StoreError::SignerDeclined`]; the
    /// gate never retries. On success an audit line is appended to the
    /// session activity log.
    async fn request_decryption(
        &self,
        record: &InsiderRecord,
        session: &mut SessionContext,
    ) -> Result<f64, StoreError>;
}

/// Owner-gated status lifecycle.
#[async_trait]
pub trait WorkflowApi: Send + Sync {
    /// Transition a pending record to verified.
    ///
    /// Requires `actor` to match the record owner (case-insensitive) and the
    /// record to be pending; otherwise [`StoreError::Unauthorized`] /
    /// [`StoreError::InvalidTransition`]. On success the session's cached
    /// list is refreshed so dependent views stay consistent.
    async fn verify(
        &self,
        id: &str,
        actor: &Identity,
        session: &mut SessionContext,
    ) -> Result<InsiderRecord, StoreError>;

    /// Transition a pending record to rejected. Same gating as
    /// [`WorkflowApi::verify`].
    async fn reject(
        &self,
        id: &str,
        actor: &Identity,
        session: &mut SessionContext,
    ) -> Result<InsiderRecord, StoreError>;
}
