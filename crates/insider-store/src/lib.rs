//! # Insider Store
//!
//! Confidential record store and workflow engine over a generic key/value
//! ledger. Numeric plaintexts are encoded before they are written, decoded
//! only after the owner authorizes decryption through a signature challenge,
//! and carried through a pending → verified/rejected lifecycle.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Entities, codec, transition rules, errors, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Adapters Layer** (`adapters/`): In-memory ledger, system time, id minting, signer
//! - **Service Layer** (`service/`): Wires domain logic to ports
//!
//! ## Consistency Notes
//!
//! - The record-id index is a single serialized list under one reserved key;
//!   its read-modify-write append is **not** serialized against concurrent
//!   writers. Two racing appends lose one id (last writer wins).
//! - Read paths degrade to empty/partial results; mutation paths surface
//!   failures and never partially apply beyond the documented record-write /
//!   index-append gap.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;
pub mod session;

// Re-export public API
pub use domain::codec::{Base64Codec, ValueCodec, PAYLOAD_MARKER};
pub use domain::config::{ChallengeConfig, StoreConfig};
pub use domain::entities::{DecryptionChallenge, InsiderRecord, RecordPayload};
pub use domain::errors::{LedgerError, SignerError, StoreError};
pub use ports::inbound::{AccessGateApi, Mutator, RecordStoreApi, WorkflowApi};
pub use ports::outbound::{IdGenerator, LedgerClient, MessageSigner, TimeSource};
pub use service::access::AccessGate;
pub use service::index::IndexManager;
pub use service::{RecordStoreDependencies, RecordStoreService};
pub use session::{ActivityLog, RecordStats, SessionContext};
