//! Demand-paged virtual memory simulator library.
//!
//! This crate implements a discrete-time, deterministic-given-seed simulation of
//! demand paging with the following:
//! 1. **Pager:** A fixed frame table with pluggable page-replacement policies (LRU, FIFO, Random).
//! 2. **Workload:** Processes that generate reference streams from a probabilistic job mix.
//! 3. **Randomness:** A replayable integer stream read from a pre-recorded sequence.
//! 4. **Simulation:** A round-robin driver that owns the simulated clock.
//! 5. **Statistics:** Per-process fault, eviction, and residency accounting.

/// Common types (addresses, identifiers, error taxonomy).
pub mod common;
/// Simulator configuration (defaults, enums, job-mix presets, validation).
pub mod config;
/// Reference-type selection from per-process probability thresholds.
pub mod jobmix;
/// Frame table, pager, and page-replacement policies.
pub mod pager;
/// Simulated processes and their reference loops.
pub mod process;
/// Deterministic pre-recorded random number source.
pub mod random;
/// Virtual address generation variants (sequential, backward, jump, random).
pub mod reference;
/// Round-robin simulation driver.
pub mod sim;
/// Per-process statistics collection and aggregation.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Error taxonomy shared by every fallible operation in the crate.
pub use crate::common::SimError;
/// Main pager type; owns the frame table and the replacement policy.
pub use crate::pager::Pager;
/// Deterministic random source; construct with `from_file` or `from_values`.
pub use crate::random::RandomSource;
/// Top-level simulation; construct with `Simulation::new`, then `run`.
pub use crate::sim::Simulation;
