//! # Insider Ledger Test Suite
//!
//! Unified test crate containing cross-component integration flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs        # Submit → list → decrypt → verify lifecycles
//!     └── index_race.rs   # The documented index lost-update anomaly
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p insider-tests
//! cargo test -p insider-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing once for the whole suite; respects `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
