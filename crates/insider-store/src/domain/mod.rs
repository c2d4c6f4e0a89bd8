//! # Domain Layer
//!
//! Pure logic, no I/O: entities and wire shapes, the value codec,
//! configuration types, and the error taxonomy.

pub mod codec;
pub mod config;
pub mod entities;
pub mod errors;

pub use codec::{Base64Codec, ValueCodec, PAYLOAD_MARKER};
pub use config::{ChallengeConfig, StoreConfig};
pub use entities::{DecryptionChallenge, InsiderRecord, RecordPayload};
pub use errors::{LedgerError, SignerError, StoreError};
