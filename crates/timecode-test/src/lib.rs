//! Timecode Test Harness - Known-answer and invariant validation
//!
//! This crate provides:
//! - Reference scenarios with known answers
//! - Seeded randomized invariant sweeps
//! - Property helpers shared with the proptest suite
//! - Criterion benchmarks (see `benches/`)

pub mod fuzzer;
pub mod scenarios;

pub use fuzzer::*;
pub use scenarios::*;

use tracing_subscriber::EnvFilter;

/// Install a test subscriber honoring `RUST_LOG`; repeated calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
