//! # Record CRUD Implementation
//!
//! Implements `RecordStoreApi` on top of the ledger, codec, and index
//! manager. Read paths degrade to empty/partial results; mutation paths
//! surface failures.

use super::RecordStoreService;
use crate::domain::codec::ValueCodec;
use crate::domain::entities::{InsiderRecord, RecordPayload};
use crate::domain::errors::StoreError;
use crate::ports::inbound::{Mutator, RecordStoreApi};
use crate::ports::outbound::{IdGenerator, LedgerClient, TimeSource};
use async_trait::async_trait;
use shared_types::{DataCategory, Identity, RecordId, RecordStatus};
use tracing::{debug, info, warn};

impl<L, C, T, I> RecordStoreService<L, C, T, I>
where
    L: LedgerClient,
    C: ValueCodec,
    T: TimeSource,
    I: IdGenerator,
{
    /// Strict single-record fetch for mutation paths: ledger failures,
    /// missing keys, and malformed bytes all surface.
    pub(crate) async fn fetch_strict(&self, id: &str) -> Result<InsiderRecord, StoreError> {
        let key = self.config.record_key(id);
        let bytes = self.ledger.get_data(&key).await?;
        if bytes.is_empty() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let payload: RecordPayload =
            serde_json::from_slice(&bytes).map_err(|err| StoreError::ParseFailure {
                key,
                message: err.to_string(),
            })?;
        Ok(InsiderRecord::from_payload(id.to_string(), payload))
    }

    /// Serialize and write one record under its key.
    pub(crate) async fn write_record(&self, record: &InsiderRecord) -> Result<(), StoreError> {
        let key = self.config.record_key(&record.id);
        let bytes =
            serde_json::to_vec(&record.to_payload()).map_err(|err| StoreError::ParseFailure {
                key: key.clone(),
                message: err.to_string(),
            })?;
        self.ledger.set_data(&key, &bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl<L, C, T, I> RecordStoreApi for RecordStoreService<L, C, T, I>
where
    L: LedgerClient,
    C: ValueCodec,
    T: TimeSource,
    I: IdGenerator,
{
    async fn create(
        &self,
        owner: Identity,
        company: String,
        category: DataCategory,
        plaintext: f64,
    ) -> Result<RecordId, StoreError> {
        let id = self.ids.next_id();
        let record = InsiderRecord {
            id: id.clone(),
            encoded_value: self.codec.encode(plaintext),
            created_at: self.time_source.now(),
            owner,
            company,
            category,
            status: RecordStatus::Pending,
        };

        // Record first, index second: the id becomes discoverable only once
        // the index write lands. If the index append fails the record is
        // orphaned but unreachable through enumeration.
        self.write_record(&record).await?;
        self.index.append_id(&id).await?;

        info!(
            "[store] created {} record {} for {}",
            record.category,
            record.short_id(),
            record.company
        );
        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Option<InsiderRecord>, StoreError> {
        let key = self.config.record_key(id);
        let bytes = match self.ledger.get_data(&key).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("[store] read of {key} failed, degrading to absent: {err}");
                return Ok(None);
            }
        };
        if bytes.is_empty() {
            return Ok(None);
        }
        match serde_json::from_slice::<RecordPayload>(&bytes) {
            Ok(payload) => Ok(Some(InsiderRecord::from_payload(id.to_string(), payload))),
            Err(err) => {
                warn!("[store] malformed record under {key}, skipping: {err}");
                Ok(None)
            }
        }
    }

    async fn list(&self) -> Result<Vec<InsiderRecord>, StoreError> {
        match self.ledger.is_available().await {
            Ok(true) => {}
            Ok(false) => {
                warn!("[store] ledger reports unavailable, listing nothing");
                return Ok(Vec::new());
            }
            Err(err) => {
                warn!("[store] availability probe failed, listing nothing: {err}");
                return Ok(Vec::new());
            }
        }

        let ids = self.index.list_ids().await;
        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            match self.get(&id).await? {
                Some(record) => records.push(record),
                None => debug!("[store] index id {id} has no readable record"),
            }
        }

        // Most recent first; stable sort keeps index order on equal timestamps.
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn update(&self, id: &str, mutate: Mutator) -> Result<InsiderRecord, StoreError> {
        let mut record = self.fetch_strict(id).await?;
        mutate(&mut record);
        self.write_record(&record).await?;
        info!("[store] updated record {}", record.short_id());
        Ok(record)
    }
}
