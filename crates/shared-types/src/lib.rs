//! # Shared Types Crate
//!
//! Domain vocabulary shared across the workspace: participant identities,
//! record identifiers, the category and status enumerations, and the ledger
//! key namespace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Wire Fidelity**: serde renames match the JSON stored in the ledger
//!   exactly; changing a field name is a breaking wire change.

pub mod entities;
pub mod keys;

pub use entities::*;
pub use keys::*;
