//! Test support utilities for prefcount integration tests
//!
//! Integration test binaries cannot reach the crate's `#[cfg(test)]` modules,
//! so the shared logging setup lives here.

pub mod logging;
