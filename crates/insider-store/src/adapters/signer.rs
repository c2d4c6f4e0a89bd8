//! # Scripted Signer Adapter
//!
//! [`MessageSigner`] driven by tests: records every message it is asked to
//! sign and can be switched to decline, standing in for a wallet prompt.

use crate::domain::errors::SignerError;
use crate::ports::outbound::MessageSigner;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Signer that approves by default and can be scripted to decline.
#[derive(Default)]
pub struct ScriptedSigner {
    decline: AtomicBool,
    signed: Mutex<Vec<String>>,
}

impl ScriptedSigner {
    /// A signer that approves every request.
    pub fn new() -> Self {
        Self::default()
    }

    /// A signer that declines every request.
    pub fn declining() -> Self {
        let signer = Self::default();
        signer.set_decline(true);
        signer
    }

    /// Switch decline behavior at runtime.
    pub fn set_decline(&self, decline: bool) {
        self.decline.store(decline, Ordering::SeqCst);
    }

    /// Every message signed so far, in order.
    pub fn signed_messages(&self) -> Vec<String> {
        self.signed.lock().clone()
    }
}

#[async_trait]
impl MessageSigner for ScriptedSigner {
    async fn sign_message(&self, message: &str) -> Result<String, SignerError> {
        if self.decline.load(Ordering::SeqCst) {
            return Err(SignerError::Declined);
        }
        self.signed.lock().push(message.to_string());
        // FNV-1a over the message; a stand-in signature stable per message.
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in message.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        Ok(format!("0x{hash:016x}"))
    }
}
