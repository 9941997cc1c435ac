//! Error taxonomy for the paging simulator.
//!
//! Three classes of failure exist, and none of them is retryable:
//! 1. **Configuration errors:** malformed job mixes, unknown algorithm names,
//!    bad machine geometry, unreadable random files. Fatal at startup.
//! 2. **Resource exhaustion:** the pre-recorded random sequence ran out before
//!    the run completed. Fatal mid-run; wrapping or reseeding would silently
//!    change results, so it is forbidden.
//! 3. **Invariant violations:** a victim search over an all-empty frame table.
//!    Unreachable in a correctly sequenced run and treated as a fatal
//!    assertion rather than a warning sentinel.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, SimError>;

/// All errors the simulator core can produce.
#[derive(Debug, Error)]
pub enum SimError {
    /// The replacement algorithm name did not match `lru`, `fifo`, or `random`.
    #[error("unknown replacement algorithm `{0}` (expected lru, fifo, or random)")]
    UnknownAlgorithm(String),

    /// A job-mix row had a negative probability or probabilities summing past 1.
    #[error(
        "invalid job mix for process {pid}: A={sequential}, B={backward}, C={jump} \
         must be non-negative and sum to at most 1"
    )]
    InvalidJobMix {
        /// 1-based process the offending row belongs to.
        pid: u32,
        /// Sequential-reference probability (A).
        sequential: f64,
        /// Backward-reference probability (B).
        backward: f64,
        /// Jump-reference probability (C).
        jump: f64,
    },

    /// A job-mix preset number outside the supported range was requested.
    #[error("job mix preset {0} is out of range (expected 1 through 4)")]
    UnknownPreset(u32),

    /// A custom job-mix table had no rows, or a per-process table whose row
    /// count disagrees with the process count.
    #[error("job mix table has {rows} rows for {processes} processes")]
    MixTableShape {
        /// Rows supplied in the table.
        rows: usize,
        /// Processes the table must cover.
        processes: u32,
    },

    /// Machine geometry that cannot form a frame table.
    #[error("invalid geometry: machine size {machine_size} with page size {page_size}")]
    InvalidGeometry {
        /// Total machine size in words.
        machine_size: u64,
        /// Page size in words.
        page_size: u64,
    },

    /// A zero-valued run parameter that must be positive.
    #[error("{name} must be positive")]
    ZeroParameter {
        /// Name of the offending configuration field.
        name: &'static str,
    },

    /// The random number file could not be opened or read.
    #[error("could not read random number file {path}")]
    RandomFile {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The random number file contained a token that is not a non-negative
    /// integer bounded by 2^31 - 1.
    #[error("invalid entry `{token}` at position {position} in random number file")]
    RandomFileEntry {
        /// The offending token, as read.
        token: String,
        /// 1-based token position within the file.
        position: usize,
    },

    /// The pre-recorded random sequence was exhausted mid-run.
    #[error("random sequence exhausted after {draws} draws; provision a longer sequence")]
    RandomExhausted {
        /// Draws consumed before exhaustion.
        draws: usize,
    },

    /// A victim search ran against a frame table with no resident pages.
    #[error("eviction requested on an empty frame table")]
    EmptyFrameTable,
}
