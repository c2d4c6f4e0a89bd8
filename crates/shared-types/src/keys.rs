//! # Ledger Key Namespace
//!
//! The flat key/value namespace convention. The index lives under a single
//! reserved key; each record lives under a prefixed key derived from its id.
//! Records are never discovered by scanning the key space; the index is the
//! sole source of truth for enumeration.

use crate::entities::RecordId;

/// Reserved key holding the JSON array of all known record ids.
pub const INDEX_KEY: &str = "insider_keys";

/// Prefix for per-record keys.
pub const RECORD_KEY_PREFIX: &str = "insider_";

/// The ledger key a record is stored under.
pub fn record_key(id: &str) -> String {
    format!("{RECORD_KEY_PREFIX}{id}")
}

/// Recover the record id from a ledger key, if it is a record key.
pub fn id_from_key(key: &str) -> Option<RecordId> {
    if key == INDEX_KEY {
        return None;
    }
    key.strip_prefix(RECORD_KEY_PREFIX).map(str::to_string)
}
