//! Random Replacement Policy.
//!
//! Evicts the frame at `draw % frame_count`, consuming exactly one value from
//! the shared pre-recorded sequence per eviction. Using the shared source
//! (rather than a private generator) keeps the whole run's draw order a
//! single replayable stream.

use super::ReplacementPolicy;
use crate::common::{Result, SimError};
use crate::pager::frame::Frame;
use crate::random::RandomSource;

/// Random policy. Stateless; the draw comes from the shared source.
#[derive(Debug, Default)]
pub struct RandomPolicy;

impl ReplacementPolicy for RandomPolicy {
    /// Maps one draw onto a frame index.
    fn select_victim(&mut self, frames: &[Frame], random: &mut RandomSource) -> Result<usize> {
        if frames.is_empty() {
            return Err(SimError::EmptyFrameTable);
        }
        let draw = random.next_int()?;
        Ok(draw as usize % frames.len())
    }
}
