//! # Ports Layer
//!
//! Inbound ports are the APIs this crate offers; outbound ports are the
//! collaborators it requires the host application to provide.

pub mod inbound;
pub mod outbound;

pub use inbound::{AccessGateApi, Mutator, RecordStoreApi, WorkflowApi};
pub use outbound::{IdGenerator, LedgerClient, MessageSigner, TimeSource};
