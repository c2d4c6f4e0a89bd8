//! # Access Gate
//!
//! Exchanges a signature over the canonical challenge for a decoded
//! plaintext. The signature proves current control of the owning identity
//! before the value is revealed; it contributes nothing to the decoding
//! itself, which keeps the gate compatible with a future backend where the
//! signature does unlock real key material.

use crate::domain::codec::ValueCodec;
use crate::domain::config::ChallengeConfig;
use crate::domain::entities::{DecryptionChallenge, InsiderRecord};
use crate::domain::errors::StoreError;
use crate::ports::inbound::AccessGateApi;
use crate::ports::outbound::{MessageSigner, TimeSource};
use crate::session::SessionContext;
use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::Timestamp;
use tracing::{debug, info, warn};

/// Signature-gated release of decoded plaintexts.
pub struct AccessGate<S, C, T>
where
    S: MessageSigner,
    C: ValueCodec,
    T: TimeSource,
{
    signer: S,
    codec: C,
    time_source: T,
    config: ChallengeConfig,
    /// Validity window start, captured at first use and reused after.
    window_start: Mutex<Option<Timestamp>>,
}

impl<S, C, T> AccessGate<S, C, T>
where
    S: MessageSigner,
    C: ValueCodec,
    T: TimeSource,
{
    pub fn new(signer: S, codec: C, time_source: T, config: ChallengeConfig) -> Self {
        Self {
            signer,
            codec,
            time_source,
            config,
            window_start: Mutex::new(None),
        }
    }

    /// The challenge a signer must sign right now.
    ///
    /// The first call pins the validity window start; later calls reuse it,
    /// so every challenge in a session renders to the same message.
    pub fn challenge(&self) -> DecryptionChallenge {
        let start_timestamp = {
            let mut start = self.window_start.lock();
            *start.get_or_insert_with(|| self.time_source.now())
        };
        DecryptionChallenge {
            public_key: self.config.public_key.clone(),
            contract_address: self.config.contract_address.clone(),
            chain_id: self.config.chain_id,
            start_timestamp,
            duration_days: self.config.duration_days,
        }
    }
}

#[async_trait]
impl<S, C, T> AccessGateApi for AccessGate<S, C, T>
where
    S: MessageSigner,
    C: ValueCodec,
    T: TimeSource,
{
    async fn request_decryption(
        &self,
        record: &InsiderRecord,
        session: &mut SessionContext,
    ) -> Result<f64, StoreError> {
        let message = self.challenge().message();
        debug!(
            "[gate] requesting signature for record {}",
            record.short_id()
        );

        if let Err(err) = self.signer.sign_message(&message).await {
            warn!("[gate] signature not obtained: {err}");
            return Err(err.into());
        }

        // Liveness gate passed; the payload is self-decodable.
        let plaintext = self.codec.decode(&record.encoded_value);
        session.note_decryption();
        info!("[gate] decrypted record {}", record.short_id());
        Ok(plaintext)
    }
}
