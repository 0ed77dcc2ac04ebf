#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod report;
pub mod sheet;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::settings::Settings;
pub use domain::{
    clear_final_results, compute_final_results, FinalScores, GameState, Place, PlayerRecord,
    PrefType,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use report::ScoreReport;
pub use sheet::GameSheet;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
