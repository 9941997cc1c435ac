//! Virtual address generation variants.
//!
//! Each process owns one active [`ReferenceKind`] at a time; the job mix
//! re-selects it before every reference. The variant set is closed and small,
//! so it is a tagged enum with a single dispatch function rather than an open
//! trait hierarchy. The `Random` variant carries the integer drawn for it at
//! selection time, which keeps the draw order fixed: selection probability
//! first, then (for a random outcome only) the target integer.

use crate::common::{Pid, VirtAddr};

/// Word offset of a process's designated start address: process `k` begins at
/// `(111 * k) mod virtual_size`.
const START_FACTOR: u64 = 111;

/// Step applied by the sequential and backward variants.
const STEP: u64 = 1;

/// How a process computes its next virtual address from its prior one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// The pre-selected variant a process is created with; references the
    /// designated start address and is used exactly once, before any
    /// reference-type selection has occurred.
    Initial,
    /// One word forward, wrapping modulo the virtual size.
    Sequential,
    /// One word backward, wrapping modulo the virtual size (never negative).
    Backward,
    /// A half-address-space hop forward, independent of randomness.
    Jump,
    /// A uniformly random target, seeded by an integer drawn at selection
    /// time: the target is `draw % virtual_size`.
    Random {
        /// The integer consumed from the random sequence when this variant
        /// was selected.
        draw: u32,
    },
}

impl ReferenceKind {
    /// Computes the next address to reference.
    ///
    /// `prior` is the address the process referenced last, or `None` before
    /// its first reference. The result is always within
    /// `[0, virtual_size)`.
    pub fn advance(self, prior: Option<VirtAddr>, pid: Pid, virtual_size: u64) -> VirtAddr {
        let start = (START_FACTOR * u64::from(pid)) % virtual_size;
        let prior = match prior {
            Some(addr) => addr.val(),
            None => start,
        };

        let next = match self {
            Self::Initial => start,
            Self::Sequential => (prior + STEP) % virtual_size,
            Self::Backward => (prior + virtual_size - STEP) % virtual_size,
            Self::Jump => (prior + virtual_size / 2) % virtual_size,
            Self::Random { draw } => u64::from(draw) % virtual_size,
        };

        VirtAddr(next)
    }
}
