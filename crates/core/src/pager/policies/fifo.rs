//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! Evicts the page that has been resident longest, ordering strictly by load
//! time. Hits never rejuvenate a frame: a page touched every tick is evicted
//! just as readily as one never touched again, which is what distinguishes
//! FIFO from LRU once a hit lands on the oldest-loaded frame.
//!
//! # Performance
//!
//! - **Time Complexity:** `select_victim()`: O(F) where F is the frame count
//! - **Space Complexity:** O(1) - load order lives in the frame stamps
//! - **Best Case:** Streaming references where all pages matter equally
//! - **Worst Case:** Hot pages loaded early (evicted despite constant hits)

use super::ReplacementPolicy;
use crate::common::{Result, SimError, Tick};
use crate::pager::frame::Frame;
use crate::random::RandomSource;

/// FIFO policy. Stateless: load order lives in the frame table itself.
#[derive(Debug, Default)]
pub struct FifoPolicy;

impl ReplacementPolicy for FifoPolicy {
    /// Scans for the smallest load stamp. Ascending index order with a strict
    /// comparison, so the lowest index wins ties.
    fn select_victim(&mut self, frames: &[Frame], _random: &mut RandomSource) -> Result<usize> {
        let mut victim: Option<(usize, Tick)> = None;

        for (idx, frame) in frames.iter().enumerate() {
            let Some(resident) = frame.resident() else {
                continue;
            };
            match victim {
                Some((_, stamp)) if resident.loaded_at >= stamp => {}
                _ => victim = Some((idx, resident.loaded_at)),
            }
        }

        victim.map(|(idx, _)| idx).ok_or(SimError::EmptyFrameTable)
    }
}
