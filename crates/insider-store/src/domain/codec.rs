//! # Value Codec
//!
//! Reversible encode/decode between a numeric plaintext and an opaque string
//! payload. The bundled codec is an obfuscation, not a cryptosystem: it hides
//! the value from casual display and is trivially invertible. It sits behind
//! the [`ValueCodec`] trait so a confidentiality-preserving scheme can be
//! substituted without touching the record store or the access gate.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Marker prefix tagging codec output so raw numeric strings stay decodable.
///
/// Payloads already written to deployed ledgers carry this exact prefix;
/// changing it orphans them.
pub const PAYLOAD_MARKER: &str = "FHE-";

/// Reversible plaintext ↔ payload transform.
pub trait ValueCodec: Send + Sync {
    /// Encode a finite numeric plaintext to an opaque payload string.
    ///
    /// Deterministic and total over finite numbers.
    fn encode(&self, plaintext: f64) -> String;

    /// Invert [`ValueCodec::encode`].
    ///
    /// Input not produced by `encode` falls back to a best-effort numeric
    /// parse; unparseable input yields `f64::NAN`. Never fails.
    fn decode(&self, payload: &str) -> f64;
}

/// Base64 obfuscation codec: shortest-decimal rendering, base64, marker prefix.
///
/// `decode(encode(x)) == x` for every finite `x`: the shortest-decimal
/// rendering of an f64 parses back to the identical bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec;

impl ValueCodec for Base64Codec {
    fn encode(&self, plaintext: f64) -> String {
        format!("{PAYLOAD_MARKER}{}", BASE64.encode(plaintext.to_string()))
    }

    fn decode(&self, payload: &str) -> f64 {
        if let Some(body) = payload.strip_prefix(PAYLOAD_MARKER) {
            return BASE64
                .decode(body)
                .ok()
                .and_then(|bytes| String::from_utf8(bytes).ok())
                .and_then(|text| text.parse::<f64>().ok())
                .unwrap_or(f64::NAN);
        }
        payload.parse::<f64>().unwrap_or(f64::NAN)
    }
}
