//! Deterministic pre-recorded random number source.
//!
//! Reproducibility is the property the whole simulator hangs on: every run
//! consumes values from a finite, pre-recorded integer sequence, strictly in
//! order, so identical inputs replay to identical results. The source has no
//! branching logic; every call advances the shared cursor exactly once.
//!
//! Three consumers share one source: reference-type selection (one probability
//! per reference), random-reference targets (one integer per random
//! reference), and random eviction (one integer per eviction). Exhausting the
//! sequence mid-run is fatal; wrapping or reseeding would silently change
//! results.

use std::fs;
use std::path::Path;

use tracing::trace;

use crate::common::{Result, SimError};

/// Largest value a recorded draw may take (2^31 - 1).
pub const MAX_DRAW: u32 = i32::MAX as u32;

/// A replayable stream of pre-recorded integers.
#[derive(Debug, Clone)]
pub struct RandomSource {
    values: Vec<u32>,
    cursor: usize,
    trace_draws: bool,
}

impl RandomSource {
    /// Loads a source from a whitespace- or line-delimited file of
    /// non-negative integers, each at most [`MAX_DRAW`].
    ///
    /// # Errors
    ///
    /// `RandomFile` when the file cannot be read; `RandomFileEntry` for any
    /// token that is not an in-range integer.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SimError::RandomFile {
            path: path.to_path_buf(),
            source,
        })?;

        let mut values = Vec::new();
        for (i, token) in contents.split_whitespace().enumerate() {
            let value: u32 = token
                .parse()
                .ok()
                .filter(|v| *v <= MAX_DRAW)
                .ok_or_else(|| SimError::RandomFileEntry {
                    token: token.to_string(),
                    position: i + 1,
                })?;
            values.push(value);
        }

        Ok(Self::from_values(values))
    }

    /// Wraps an in-memory sequence. Used by tests and embedders.
    pub fn from_values(values: Vec<u32>) -> Self {
        Self {
            values,
            cursor: 0,
            trace_draws: false,
        }
    }

    /// Enables per-draw logging through `tracing` at trace level.
    pub fn with_trace_draws(mut self, trace_draws: bool) -> Self {
        self.trace_draws = trace_draws;
        self
    }

    /// Returns the next integer in the sequence and advances the cursor.
    ///
    /// # Errors
    ///
    /// `RandomExhausted` once the sequence runs out; the run must abort.
    pub fn next_int(&mut self) -> Result<u32> {
        let value = *self
            .values
            .get(self.cursor)
            .ok_or(SimError::RandomExhausted { draws: self.cursor })?;
        self.cursor += 1;
        if self.trace_draws {
            trace!(target: "draws", "uses random number {value}");
        }
        Ok(value)
    }

    /// Derives a probability in [0, 1) from the next integer.
    ///
    /// # Errors
    ///
    /// `RandomExhausted`, as for [`next_int`](Self::next_int).
    pub fn next_probability(&mut self) -> Result<f64> {
        let value = self.next_int()?;
        Ok(f64::from(value) / (f64::from(MAX_DRAW) + 1.0))
    }

    /// Number of values consumed so far.
    pub fn draws_consumed(&self) -> usize {
        self.cursor
    }

    /// Number of values still available.
    pub fn draws_remaining(&self) -> usize {
        self.values.len() - self.cursor
    }
}
