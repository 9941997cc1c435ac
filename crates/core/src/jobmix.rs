//! Reference-type selection from per-process probability thresholds.
//!
//! A job mix turns the three independent probabilities of a [`MixEntry`] into
//! cumulative thresholds once, at construction; selection is then a constant
//! number of comparisons with no allocation. Boundary draws land in the
//! lower-indexed bucket (a draw exactly equal to the sequential threshold
//! selects Sequential), and that tie direction must be preserved exactly for
//! replay against recorded sequences.

use crate::common::{Pid, Result};
use crate::config::{MixEntry, ResolvedMix};
use crate::random::RandomSource;
use crate::reference::ReferenceKind;

/// Cumulative thresholds for one process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixThresholds {
    /// Probability A of a sequential reference.
    pub sequential: f64,
    /// Probability B of a backward reference.
    pub backward: f64,
    /// Probability C of a jump reference.
    pub jump: f64,
    /// Derived probability D = 1 - A - B - C of a random reference.
    pub random: f64,
    /// Draws at or below this select Sequential (= A).
    pub seq_threshold: f64,
    /// Draws at or below this (and above `seq_threshold`) select Backward (= A + B).
    pub back_threshold: f64,
    /// Draws at or below this (and above `back_threshold`) select Jump (= A + B + C).
    pub jump_threshold: f64,
}

impl MixThresholds {
    fn from_entry(entry: &MixEntry) -> Self {
        let seq_threshold = entry.sequential;
        let back_threshold = seq_threshold + entry.backward;
        let jump_threshold = back_threshold + entry.jump;
        Self {
            sequential: entry.sequential,
            backward: entry.backward,
            jump: entry.jump,
            random: 1.0 - jump_threshold,
            seq_threshold,
            back_threshold,
            jump_threshold,
        }
    }
}

/// The reference-type selector shared by every process in a run.
#[derive(Debug, Clone, PartialEq)]
pub struct JobMix {
    uniform: bool,
    rows: Vec<MixThresholds>,
    process_count: u32,
}

impl JobMix {
    /// Builds the selector from an already-validated mix.
    pub fn new(mix: &ResolvedMix) -> Self {
        Self {
            uniform: mix.uniform,
            rows: mix.rows.iter().map(MixThresholds::from_entry).collect(),
            process_count: mix.process_count,
        }
    }

    /// Number of processes this mix describes.
    pub fn process_count(&self) -> u32 {
        self.process_count
    }

    /// Thresholds governing `pid` (row 0 when the mix is uniform).
    pub fn thresholds(&self, pid: Pid) -> &MixThresholds {
        let idx = if self.uniform { 0 } else { (pid - 1) as usize };
        &self.rows[idx]
    }

    /// Classifies a probability draw into the reference variant that governs
    /// the next access.
    ///
    /// A draw above the jump threshold selects the Random variant, which
    /// additionally consumes one integer from the random source as its target
    /// seed.
    ///
    /// # Errors
    ///
    /// `RandomExhausted` when the Random branch cannot draw its target.
    pub fn select(
        &self,
        draw: f64,
        pid: Pid,
        random: &mut RandomSource,
    ) -> Result<ReferenceKind> {
        let row = self.thresholds(pid);

        if draw <= row.seq_threshold {
            Ok(ReferenceKind::Sequential)
        } else if draw <= row.back_threshold {
            Ok(ReferenceKind::Backward)
        } else if draw <= row.jump_threshold {
            Ok(ReferenceKind::Jump)
        } else {
            let target = random.next_int()?;
            Ok(ReferenceKind::Random { draw: target })
        }
    }
}
