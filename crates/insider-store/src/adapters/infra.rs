//! # Infrastructure Adapters
//!
//! Wall-clock time, record-id minting, and fabricated public key material.

use crate::ports::outbound::{IdGenerator, TimeSource};
use rand::Rng;
use shared_types::{RecordId, Timestamp};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const HEX: &[u8] = b"0123456789abcdef";

/// Length of the random id suffix.
const ID_SUFFIX_LEN: usize = 7;

/// Hex digit count of fabricated public key material.
pub const PUBLIC_KEY_HEX_DIGITS: usize = 2000;

/// Default time source using system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Mints `<unix-millis>-<base36 suffix>` identifiers.
///
/// The time prefix plus a 7-character random suffix makes collisions
/// practically impossible at the system's expected write rate; nothing
/// downstream parses the shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdGenerator;

impl IdGenerator for SystemIdGenerator {
    fn next_id(&self) -> RecordId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        let mut rng = rand::thread_rng();
        let mut id = millis.to_string();
        id.push('-');
        for _ in 0..ID_SUFFIX_LEN {
            id.push(BASE36[rng.gen_range(0..BASE36.len())] as char);
        }
        id
    }
}

/// Fabricate `0x`-prefixed hex key material of `digits` hex digits.
///
/// Stands in for a key registry until a real decryption backend is
/// attached; [`PUBLIC_KEY_HEX_DIGITS`] matches the material deployed
/// verifiers have seen.
pub fn generate_public_key(digits: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut key = String::with_capacity(2 + digits);
    key.push_str("0x");
    for _ in 0..digits {
        key.push(HEX[rng.gen_range(0..HEX.len())] as char);
    }
    key
}
