#![cfg(test)]

//! Unit test logging initialization
//!
//! Installed once per test binary by the `ctor` hook in `lib.rs`. Integration
//! tests use the same setup from `prefcount_test_support::logging`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize logging for tests.
///
/// Idempotent and race-safe. The level comes from, in order:
///
/// 1. `TEST_LOG` environment variable (preferred)
/// 2. `RUST_LOG` environment variable (fallback)
/// 3. `"warn"` (default, quiet)
///
/// ```bash
/// TEST_LOG=debug cargo test -p prefcount scoring
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // Critical for cargo/nextest capture
            .without_time()
            .try_init()
            .ok(); // Never panic if something else already initialized
    });
}
