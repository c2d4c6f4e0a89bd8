//! # Outbound Ports (Driven Ports)
//!
//! Collaborators this crate requires the host application to implement.
//! Every ledger and signer call is an independent suspending operation; the
//! core awaits them sequentially within a logical operation and observes
//! every ack or failure before reporting completion.

use crate::domain::errors::{LedgerError, SignerError};
use async_trait::async_trait;
use shared_types::{RecordId, Timestamp};
use std::sync::atomic::{AtomicU64, Ordering};

/// Thin read/write façade over the external key/value ledger.
///
/// Production: a wallet-connected contract client.
/// Testing: `InMemoryLedger` (adapters).
///
/// Operations are ordered only per-caller; across callers the ledger gives
/// no isolation. A versioned backend may return
/// [`LedgerError::WriteConflict`] from `set_data` to serialize racing
/// writers; the core treats it as a failed write.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Whether the ledger will accept reads and writes right now.
    async fn is_available(&self) -> Result<bool, LedgerError>;

    /// Fetch the bytes stored under `key`. Empty bytes mean the key is unset.
    async fn get_data(&self, key: &str) -> Result<Vec<u8>, LedgerError>;

    /// Durably store `value` under `key`, replacing any previous value.
    async fn set_data(&self, key: &str, value: &[u8]) -> Result<(), LedgerError>;
}

/// Off-ledger signature capability.
///
/// Production: a wallet prompt. Testing: `ScriptedSigner` (adapters).
#[async_trait]
pub trait MessageSigner: Send + Sync {
    /// Produce a signature over exactly `message`. Fails if the user or
    /// caller declines.
    async fn sign_message(&self, message: &str) -> Result<String, SignerError>;
}

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Current unix time in seconds.
    fn now(&self) -> Timestamp;
}

/// Mints fresh record ids, unique across the deployment.
pub trait IdGenerator: Send + Sync {
    /// Mint the next id.
    fn next_id(&self) -> RecordId;
}

// =============================================================================
// ARC FORWARDING
// Ports are commonly shared between components and their drivers; delegate
// through Arc so one adapter instance can serve both.
// =============================================================================

#[async_trait]
impl<S: MessageSigner + ?Sized> MessageSigner for std::sync::Arc<S> {
    async fn sign_message(&self, message: &str) -> Result<String, SignerError> {
        (**self).sign_message(message).await
    }
}

impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<I: IdGenerator + ?Sized> IdGenerator for std::sync::Arc<I> {
    fn next_id(&self) -> RecordId {
        (**self).next_id()
    }
}

// =============================================================================
// TEST DOUBLES
// Production adapters live in adapters/; the doubles below exist for unit
// tests that need deterministic time and ids.
// =============================================================================

/// Settable time source for unit tests.
pub struct FixedTimeSource {
    now: AtomicU64,
}

impl FixedTimeSource {
    /// Create a source frozen at `now` seconds.
    pub fn new(now: Timestamp) -> Self {
        Self {
            now: AtomicU64::new(now),
        }
    }

    /// Move the clock.
    pub fn set(&self, now: Timestamp) {
        self.now.store(now, Ordering::SeqCst);
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        self.now.load(Ordering::SeqCst)
    }
}

/// Sequential id generator for unit tests: `rec-1`, `rec-2`, ...
///
/// Give each simulated caller its own prefix; two generators with the same
/// prefix mint colliding ids.
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::with_prefix("rec")
    }
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator minting `<prefix>-1`, `<prefix>-2`, ...
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> RecordId {
        format!(
            "{}-{}",
            self.prefix,
            self.counter.fetch_add(1, Ordering::SeqCst) + 1
        )
    }
}
