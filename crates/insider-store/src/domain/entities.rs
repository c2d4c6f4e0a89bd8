//! # Domain Entities
//!
//! The record in its two shapes (the wire payload stored in the ledger and
//! the domain view joined with its id) plus the decryption challenge.

use serde::{Deserialize, Serialize};
use shared_types::{DataCategory, Identity, RecordId, RecordStatus, Timestamp};

/// Wire shape of a record, stored as UTF-8 JSON under `insider_<id>`.
///
/// Field names are the wire contract; rename nothing without migrating
/// stored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPayload {
    /// Codec payload string.
    pub value: String,
    /// Unix seconds when the record was created. Immutable once set.
    pub timestamp: Timestamp,
    /// Owning identity. Immutable once set.
    pub owner: Identity,
    /// Company the record concerns.
    pub company: String,
    /// Disclosure category.
    #[serde(rename = "dataType")]
    pub data_type: DataCategory,
    /// Verification status. Records written before the workflow existed
    /// carry no status field and load as pending.
    #[serde(default)]
    pub status: RecordStatus,
}

/// A record joined with its ledger id.
///
/// The payload stays encoded here; only the access gate turns it back into
/// a plaintext, and only after the owner signs the challenge.
#[derive(Debug, Clone, PartialEq)]
pub struct InsiderRecord {
    /// Opaque identifier, unique across the deployment.
    pub id: RecordId,
    /// Codec output; plaintext hidden from casual readers.
    pub encoded_value: String,
    /// Unix seconds when the record was created.
    pub created_at: Timestamp,
    /// Owning identity.
    pub owner: Identity,
    /// Company the record concerns.
    pub company: String,
    /// Disclosure category.
    pub category: DataCategory,
    /// Verification status.
    pub status: RecordStatus,
}

impl InsiderRecord {
    /// Join a wire payload with its id.
    pub fn from_payload(id: RecordId, payload: RecordPayload) -> Self {
        Self {
            id,
            encoded_value: payload.value,
            created_at: payload.timestamp,
            owner: payload.owner,
            company: payload.company,
            category: payload.data_type,
            status: payload.status,
        }
    }

    /// Project back to the wire shape for re-serialization.
    pub fn to_payload(&self) -> RecordPayload {
        RecordPayload {
            value: self.encoded_value.clone(),
            timestamp: self.created_at,
            owner: self.owner.clone(),
            company: self.company.clone(),
            data_type: self.category,
            status: self.status,
        }
    }

    /// Short id used in audit lines and logs.
    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }
}

/// First six characters of a record id (ids are ASCII).
pub(crate) fn short_id(id: &str) -> &str {
    &id[..id.len().min(6)]
}

/// The challenge a signer must sign before the gate releases a plaintext.
///
/// Constructed fresh per decryption attempt, never persisted, and bound to
/// one set of field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptionChallenge {
    /// Public key material, hex with `0x` prefix.
    pub public_key: String,
    /// Target contract address.
    pub contract_address: String,
    /// Chain identifier.
    pub chain_id: u64,
    /// Validity window start, unix seconds.
    pub start_timestamp: Timestamp,
    /// Validity window length in days.
    pub duration_days: u32,
}

impl DecryptionChallenge {
    /// Render the canonical message text.
    ///
    /// Field order and spelling are fixed; any reordering or omission breaks
    /// compatibility with verifiers expecting this form.
    pub fn message(&self) -> String {
        format!(
            "publickey:{}\ncontractAddresses:{}\ncontractsChainId:{}\nstartTimestamp:{}\ndurationDays:{}",
            self.public_key,
            self.contract_address,
            self.chain_id,
            self.start_timestamp,
            self.duration_days
        )
    }
}
