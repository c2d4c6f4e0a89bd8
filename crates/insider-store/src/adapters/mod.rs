//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.

pub mod infra;
pub mod memory_ledger;
pub mod signer;

pub use infra::{generate_public_key, SystemIdGenerator, SystemTimeSource, PUBLIC_KEY_HEX_DIGITS};
pub use memory_ledger::InMemoryLedger;
pub use signer::ScriptedSigner;
