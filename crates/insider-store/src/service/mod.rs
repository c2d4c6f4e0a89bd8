//! # Record Store Service
//!
//! The main service implementing the record store and workflow APIs.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `RecordStoreApi` for record CRUD
//! 2. Implements `WorkflowApi` for owner-gated status transitions
//! 3. Owns the encode/decode boundary and the index manager
//! 4. Uses dependency injection for all external dependencies

pub mod access;
pub mod index;
mod records;
mod workflow;

use crate::domain::codec::ValueCodec;
use crate::domain::config::StoreConfig;
use crate::ports::outbound::{IdGenerator, LedgerClient, TimeSource};
use self::index::IndexManager;
use std::sync::Arc;

/// The record store service.
///
/// Generic over its ports; production wiring and tests differ only in the
/// adapters passed in. The ledger is shared with the index manager, so it
/// arrives behind an `Arc`.
pub struct RecordStoreService<L, C, T, I>
where
    L: LedgerClient,
    C: ValueCodec,
    T: TimeSource,
    I: IdGenerator,
{
    /// Key-value ledger for persistence.
    pub(crate) ledger: Arc<L>,
    /// Plaintext ↔ payload transform.
    pub(crate) codec: C,
    /// Time source for creation timestamps.
    pub(crate) time_source: T,
    /// Record-id minting.
    pub(crate) ids: I,
    /// Index of all known record ids.
    pub(crate) index: IndexManager<L>,
    /// Key-namespace configuration.
    pub(crate) config: StoreConfig,
}

/// Dependencies for `RecordStoreService`.
pub struct RecordStoreDependencies<L, C, T, I> {
    pub ledger: Arc<L>,
    pub codec: C,
    pub time_source: T,
    pub ids: I,
}

impl<L, C, T, I> RecordStoreService<L, C, T, I>
where
    L: LedgerClient,
    C: ValueCodec,
    T: TimeSource,
    I: IdGenerator,
{
    /// Create a new record store service with the given dependencies.
    pub fn new(deps: RecordStoreDependencies<L, C, T, I>, config: StoreConfig) -> Self {
        let index = IndexManager::new(Arc::clone(&deps.ledger), config.index_key.clone());
        Self {
            ledger: deps.ledger,
            codec: deps.codec,
            time_source: deps.time_source,
            ids: deps.ids,
            index,
            config,
        }
    }

    /// The index manager backing enumeration.
    pub fn index(&self) -> &IndexManager<L> {
        &self.index
    }
}
