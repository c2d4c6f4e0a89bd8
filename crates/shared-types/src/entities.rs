//! # Core Domain Vocabulary
//!
//! Identities, timestamps, record identifiers, and the two fixed
//! enumerations every crate in the workspace speaks: the disclosure
//! category and the verification status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unix timestamp in seconds since epoch.
pub type Timestamp = u64;

/// Opaque record identifier, caller-assigned at creation and never reused.
///
/// Minted as `<unix-millis>-<base36 suffix>`, but nothing in the workspace
/// relies on that shape beyond uniqueness.
pub type RecordId = String;

/// A participant identity (wallet-style address string).
///
/// Identities are compared case-insensitively via [`Identity::matches`];
/// the same address may arrive with different checksum casing depending on
/// which client produced it. Derived equality stays byte-exact so the type
/// can be used as a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Wrap a raw address string.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive identity comparison.
    pub fn matches(&self, other: &Identity) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for Identity {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}

/// The fixed set of disclosure categories a record may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataCategory {
    /// Earnings report ahead of publication.
    Earnings,
    /// Merger or acquisition information.
    Merger,
    /// Product launch information.
    Product,
    /// Regulation change information.
    Regulation,
}

impl DataCategory {
    /// All categories, in display order.
    pub const ALL: [DataCategory; 4] = [
        DataCategory::Earnings,
        DataCategory::Merger,
        DataCategory::Product,
        DataCategory::Regulation,
    ];

    /// The lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataCategory::Earnings => "earnings",
            DataCategory::Merger => "merger",
            DataCategory::Product => "product",
            DataCategory::Regulation => "regulation",
        }
    }
}

impl fmt::Display for DataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verification status of a record.
///
/// `Pending` is the sole initial state. `Verified` and `Rejected` are
/// terminal: no transition leaves them. Records written by clients that
/// predate the workflow carry no status field and deserialize as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Awaiting an owner decision.
    #[default]
    Pending,
    /// Owner confirmed the record.
    Verified,
    /// Owner rejected the record.
    Rejected,
}

impl RecordStatus {
    /// Whether this status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RecordStatus::Pending)
    }

    /// Whether a transition from `self` to `next` is legal.
    ///
    /// The only legal transitions are pending → verified and
    /// pending → rejected, each at most once.
    pub fn can_transition_to(&self, next: RecordStatus) -> bool {
        matches!(
            (self, next),
            (RecordStatus::Pending, RecordStatus::Verified)
                | (RecordStatus::Pending, RecordStatus::Rejected)
        )
    }

    /// The lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "pending",
            RecordStatus::Verified => "verified",
            RecordStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
