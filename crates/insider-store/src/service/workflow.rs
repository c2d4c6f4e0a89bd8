//! # Workflow Engine Implementation
//!
//! Owner-gated status transitions: pending → verified | rejected, once.
//! Enforcement is client-side; nothing ledger-side prevents a non-owner
//! write (the ledger port carries no identity).

use super::RecordStoreService;
use crate::domain::codec::ValueCodec;
use crate::domain::entities::InsiderRecord;
use crate::domain::errors::StoreError;
use crate::ports::inbound::{RecordStoreApi, WorkflowApi};
use crate::ports::outbound::{IdGenerator, LedgerClient, TimeSource};
use crate::session::SessionContext;
use async_trait::async_trait;
use shared_types::{Identity, RecordStatus};
use tracing::info;

impl<L, C, T, I> RecordStoreService<L, C, T, I>
where
    L: LedgerClient,
    C: ValueCodec,
    T: TimeSource,
    I: IdGenerator,
{
    async fn transition(
        &self,
        id: &str,
        actor: &Identity,
        next: RecordStatus,
        session: &mut SessionContext,
    ) -> Result<InsiderRecord, StoreError> {
        let record = self.fetch_strict(id).await?;

        if !record.owner.matches(actor) {
            return Err(StoreError::Unauthorized {
                id: id.to_string(),
                actor: actor.clone(),
            });
        }
        if !record.status.can_transition_to(next) {
            return Err(StoreError::InvalidTransition {
                id: id.to_string(),
                status: record.status,
            });
        }

        let updated = self
            .update(id, Box::new(move |record| record.status = next))
            .await?;
        info!(
            "[workflow] record {} is now {}",
            updated.short_id(),
            updated.status
        );

        // Keep dependent views consistent with what the ledger now holds.
        session.records = self.list().await?;
        session.note_transition(id, next);

        Ok(updated)
    }
}

#[async_trait]
impl<L, C, T, I> WorkflowApi for RecordStoreService<L, C, T, I>
where
    L: LedgerClient,
    C: ValueCodec,
    T: TimeSource,
    I: IdGenerator,
{
    async fn verify(
        &self,
        id: &str,
        actor: &Identity,
        session: &mut SessionContext,
    ) -> Result<InsiderRecord, StoreError> {
        self.transition(id, actor, RecordStatus::Verified, session)
            .await
    }

    async fn reject(
        &self,
        id: &str,
        actor: &Identity,
        session: &mut SessionContext,
    ) -> Result<InsiderRecord, StoreError> {
        self.transition(id, actor, RecordStatus::Rejected, session)
            .await
    }
}
