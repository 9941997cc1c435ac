//! Page-Replacement Policies.
//!
//! Implements the victim-selection algorithms the pager runs when a fault
//! hits a full frame table.
//!
//! # Policies
//!
//! - `Fifo`: evict the oldest-loaded page; hits never rejuvenate a frame.
//! - `Lru`: evict the least recently touched page, counting loads and hits.
//! - `Random`: evict the frame at `draw % frame_count`.
//!
//! Victim selection is a linear scan over the frame table. The scan runs in
//! ascending index order with strict comparisons, so when two frames carry
//! equal stamps the lowest index wins. That tie-break is observable behavior
//! and must match replays of recorded runs exactly.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Random replacement policy.
pub mod random;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use random::RandomPolicy;

use crate::common::Result;
use crate::pager::frame::Frame;
use crate::random::RandomSource;

/// Trait for page-replacement victim selection.
///
/// The pager only invokes a policy when the table has no free slot left, so
/// implementations may assume every frame is populated; an all-empty table is
/// an invariant violation reported as `EmptyFrameTable`.
pub trait ReplacementPolicy: Send + Sync {
    /// Selects the index of the frame to overwrite.
    ///
    /// # Arguments
    ///
    /// * `frames` - The full frame table.
    /// * `random` - The shared random source; only the Random policy draws
    ///   from it (exactly once per eviction).
    ///
    /// # Errors
    ///
    /// `EmptyFrameTable` when no frame holds a page; `RandomExhausted` when a
    /// required draw cannot be satisfied.
    fn select_victim(&mut self, frames: &[Frame], random: &mut RandomSource) -> Result<usize>;
}
