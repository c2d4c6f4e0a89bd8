//! # Configuration Types
//!
//! Plain config structs constructed by the embedding application.

use shared_types::{INDEX_KEY, RECORD_KEY_PREFIX};

/// Key-namespace configuration for the record store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Reserved key holding the record-id index.
    pub index_key: String,
    /// Prefix for per-record keys.
    pub record_key_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            index_key: INDEX_KEY.to_string(),
            record_key_prefix: RECORD_KEY_PREFIX.to_string(),
        }
    }
}

impl StoreConfig {
    /// The ledger key a record is stored under.
    pub fn record_key(&self, id: &str) -> String {
        format!("{}{}", self.record_key_prefix, id)
    }
}

/// Signature-challenge parameters for the access gate.
///
/// The validity window start is not configured here; the gate captures it at
/// first use.
#[derive(Debug, Clone)]
pub struct ChallengeConfig {
    /// Public key material, hex with `0x` prefix.
    pub public_key: String,
    /// Target contract address.
    pub contract_address: String,
    /// Chain identifier.
    pub chain_id: u64,
    /// Validity window length in days.
    pub duration_days: u32,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            contract_address: String::new(),
            chain_id: 0,
            duration_days: 30,
        }
    }
}
