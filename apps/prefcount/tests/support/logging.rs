//! Logging for integration test binaries.
//!
//! Level follows `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
//!
//! ```bash
//! TEST_LOG=debug cargo test -p prefcount --test sheet_files
//! ```

/// Runs once per integration test binary, before any test.
#[ctor::ctor]
fn _auto_init_for_integration_tests() {
    prefcount_test_support::logging::init();
}
