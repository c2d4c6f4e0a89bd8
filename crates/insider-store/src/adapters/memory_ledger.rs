//! # In-Memory Ledger Adapter
//!
//! Process-local [`LedgerClient`] for tests and local runs. Fault switches
//! simulate an unreachable or failing ledger so degraded-path behavior can
//! be exercised deterministically.

use crate::domain::errors::LedgerError;
use crate::ports::outbound::LedgerClient;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory key-value ledger.
///
/// Shared across callers via `Arc`; interior mutability keeps the port's
/// `&self` methods usable from several logical callers at once, which is
/// exactly the setting in which the index lost-update race occurs.
#[derive(Default)]
pub struct InMemoryLedger {
    data: RwLock<HashMap<String, Vec<u8>>>,
    unavailable: AtomicBool,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the availability flag reported by `is_available`.
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    /// Make every subsequent `get_data` fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `set_data` fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Seed raw bytes under a key, bypassing the port. Used by tests to
    /// plant malformed content.
    pub fn insert_raw(&self, key: &str, value: impl Into<Vec<u8>>) {
        self.data.write().insert(key.to_string(), value.into());
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

#[async_trait]
impl LedgerClient for InMemoryLedger {
    async fn is_available(&self) -> Result<bool, LedgerError> {
        Ok(!self.unavailable.load(Ordering::SeqCst))
    }

    async fn get_data(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(LedgerError::Io {
                message: format!("read of {key} failed"),
            });
        }
        Ok(self.data.read().get(key).cloned().unwrap_or_default())
    }

    async fn set_data(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(LedgerError::Io {
                message: format!("write of {key} failed"),
            });
        }
        self.data.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
