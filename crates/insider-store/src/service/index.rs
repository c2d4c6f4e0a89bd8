//! # Index Manager
//!
//! Maintains the set of record identifiers under a single reserved key.
//! All record discovery goes through this component; the ledger key space
//! is never scanned.

use crate::domain::errors::LedgerError;
use crate::ports::outbound::LedgerClient;
use shared_types::RecordId;
use std::sync::Arc;
use tracing::warn;

/// Manager for the serialized id list under the reserved index key.
///
/// The append path is a plain read-modify-write with **no** lock,
/// transaction, or version token: two concurrent appends race and the last
/// `store` wins, silently dropping the other writer's id. Callers must
/// tolerate eventual, not immediate, visibility of concurrent submissions.
/// The `load`/`store` halves are public so tests can interleave two cycles
/// deterministically and so a conditional-write ledger can serialize them.
pub struct IndexManager<L> {
    ledger: Arc<L>,
    index_key: String,
}

impl<L: LedgerClient> IndexManager<L> {
    pub fn new(ledger: Arc<L>, index_key: impl Into<String>) -> Self {
        Self {
            ledger,
            index_key: index_key.into(),
        }
    }

    /// The reserved key this index lives under.
    pub fn index_key(&self) -> &str {
        &self.index_key
    }

    /// Read the full id sequence, never failing the caller.
    ///
    /// Missing or empty key yields an empty list; a failed read is logged
    /// and yields an empty list.
    pub async fn list_ids(&self) -> Vec<RecordId> {
        match self.load().await {
            Ok(ids) => ids,
            Err(err) => {
                warn!("[index] index read failed, degrading to empty: {err}");
                Vec::new()
            }
        }
    }

    /// First half of the append cycle: the id sequence as currently stored.
    ///
    /// Malformed content is logged and treated as empty; the next `store`
    /// rebuilds the key. Only ledger failures propagate.
    pub async fn load(&self) -> Result<Vec<RecordId>, LedgerError> {
        let bytes = self.ledger.get_data(&self.index_key).await?;
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_slice::<Vec<RecordId>>(&bytes) {
            Ok(ids) => Ok(ids),
            Err(err) => {
                warn!("[index] malformed index content, treating as empty: {err}");
                Ok(Vec::new())
            }
        }
    }

    /// Second half of the append cycle: write back the full sequence.
    pub async fn store(&self, ids: &[RecordId]) -> Result<(), LedgerError> {
        let bytes = serde_json::to_vec(ids).map_err(|err| LedgerError::Io {
            message: format!("index serialization failed: {err}"),
        })?;
        self.ledger.set_data(&self.index_key, &bytes).await
    }

    /// Read-modify-write append of one id.
    ///
    /// Not serialized against other writers; see the type docs for the
    /// lost-update behavior.
    pub async fn append_id(&self, id: &str) -> Result<(), LedgerError> {
        let mut ids = self.load().await?;
        ids.push(id.to_string());
        self.store(&ids).await
    }
}
