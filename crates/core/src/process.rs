//! Simulated processes and their reference loops.
//!
//! A process owns its remaining-reference counter, the address it referenced
//! most recently, and the currently selected reference variant. The driver
//! alternates two calls per reference slot: [`Process::drive`] issues one
//! reference through the pager using the current variant, then
//! [`Process::retarget`] re-selects the variant for the next reference. That
//! ordering lets the pre-selected Initial variant govern the first reference
//! and fixes the order in which random values are consumed.

use crate::common::{Pid, Result, Tick, VirtAddr};
use crate::jobmix::JobMix;
use crate::pager::Pager;
use crate::random::RandomSource;
use crate::reference::ReferenceKind;

/// One simulated workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    id: Pid,
    virtual_size: u64,
    total_references: u64,
    remaining_references: u64,
    prior_address: Option<VirtAddr>,
    current_kind: ReferenceKind,
}

impl Process {
    /// Creates a process with the Initial variant pre-selected.
    pub fn new(id: Pid, virtual_size: u64, reference_count: u64) -> Self {
        Self {
            id,
            virtual_size,
            total_references: reference_count,
            remaining_references: reference_count,
            prior_address: None,
            current_kind: ReferenceKind::Initial,
        }
    }

    /// Issues one reference through the pager at time `now`.
    ///
    /// Resolves the current variant to the next address, forwards it to the
    /// pager, records it as the new prior, and decrements the remaining
    /// counter. Once the counter reaches zero this is an idempotent no-op.
    ///
    /// # Errors
    ///
    /// Propagates pager failures (a random eviction can exhaust the random
    /// sequence).
    pub fn drive(&mut self, pager: &mut Pager, random: &mut RandomSource, now: Tick) -> Result<()> {
        if self.remaining_references == 0 {
            return Ok(());
        }

        let next = self
            .current_kind
            .advance(self.prior_address, self.id, self.virtual_size);
        pager.reference(next, self.id, now, random)?;

        self.prior_address = Some(next);
        self.remaining_references -= 1;
        Ok(())
    }

    /// Re-selects the active reference variant for the next `drive`.
    ///
    /// Draws one probability from the random source; a Random outcome draws
    /// one further integer as the variant's target seed.
    ///
    /// # Errors
    ///
    /// `RandomExhausted` when either draw cannot be satisfied.
    pub fn retarget(&mut self, random: &mut RandomSource, jobmix: &JobMix) -> Result<()> {
        let draw = random.next_probability()?;
        self.current_kind = jobmix.select(draw, self.id, random)?;
        Ok(())
    }

    /// True once the process has issued its full reference budget.
    pub fn should_terminate(&self) -> bool {
        self.remaining_references == 0
    }

    /// Process identifier (1-based).
    pub fn id(&self) -> Pid {
        self.id
    }

    /// Virtual address space size in words.
    pub fn virtual_size(&self) -> u64 {
        self.virtual_size
    }

    /// References this process was created with.
    pub fn total_references(&self) -> u64 {
        self.total_references
    }

    /// References still to issue.
    pub fn remaining_references(&self) -> u64 {
        self.remaining_references
    }

    /// The address referenced most recently, if any.
    pub fn prior_address(&self) -> Option<VirtAddr> {
        self.prior_address
    }
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Process {}: size {}, total reference count {}, remaining reference count {}",
            self.id, self.virtual_size, self.total_references, self.remaining_references
        )
    }
}
