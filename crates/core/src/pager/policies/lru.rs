//! Least Recently Used (LRU) Replacement Policy.
//!
//! Evicts the page that has gone longest without being touched, where both
//! the initial load and every later hit count as touches. The victim is the
//! frame with the smallest `last_access_at` stamp.
//!
//! # Performance
//!
//! - **Time Complexity:** `select_victim()`: O(F) where F is the frame count
//! - **Space Complexity:** O(1) - all state lives in the frame stamps
//! - **Best Case:** Workloads with temporal locality (sequential job mixes)
//! - **Worst Case:** Cyclic scans larger than physical memory (thrashing)

use super::ReplacementPolicy;
use crate::common::{Result, SimError, Tick};
use crate::pager::frame::Frame;
use crate::random::RandomSource;

/// LRU policy. Stateless: recency lives in the frame table itself.
#[derive(Debug, Default)]
pub struct LruPolicy;

impl ReplacementPolicy for LruPolicy {
    /// Scans for the smallest last-access stamp. Ascending index order with a
    /// strict comparison, so the lowest index wins ties.
    fn select_victim(&mut self, frames: &[Frame], _random: &mut RandomSource) -> Result<usize> {
        let mut victim: Option<(usize, Tick)> = None;

        for (idx, frame) in frames.iter().enumerate() {
            let Some(resident) = frame.resident() else {
                continue;
            };
            match victim {
                Some((_, stamp)) if resident.last_access_at >= stamp => {}
                _ => victim = Some((idx, resident.last_access_at)),
            }
        }

        victim.map(|(idx, _)| idx).ok_or(SimError::EmptyFrameTable)
    }
}
