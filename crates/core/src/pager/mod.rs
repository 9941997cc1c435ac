//! The pager: frame table, fault handling, and eviction bookkeeping.
//!
//! Every memory reference in the simulation lands here. The pager resolves a
//! virtual address to a page identity, linear-scans the frame table for it,
//! and on a miss either fills a free slot or asks the configured replacement
//! policy for a victim. Per-process statistics are maintained as a side
//! effect of every fault and eviction; they are not recomputed afterward.
//!
//! Free slots are handed out from the highest index downward; once the free
//! cursor is spent, every subsequent fault goes through eviction.

/// Physical frame slots and resident-page bookkeeping.
pub mod frame;

/// Page-replacement policy implementations (FIFO, LRU, Random).
pub mod policies;

use std::collections::BTreeMap;

use tracing::debug;

use self::frame::Frame;
use self::policies::{FifoPolicy, LruPolicy, RandomPolicy, ReplacementPolicy};
use crate::common::{PageId, Pid, Result, Tick, VirtAddr};
use crate::config::Algorithm;
use crate::random::RandomSource;
use crate::stats::{ProcessStats, SimulationReport};

/// Fixed-capacity frame table plus the replacement policy that feeds on it.
pub struct Pager {
    page_size: u64,
    frames: Vec<Frame>,
    /// Next free slot to fill, counting down from the highest index; `None`
    /// once the table is saturated.
    free_cursor: Option<usize>,
    policy: Box<dyn ReplacementPolicy>,
    stats: BTreeMap<Pid, ProcessStats>,
    trace_paging: bool,
}

impl Pager {
    /// Creates a pager for a machine of `machine_size` words split into
    /// `machine_size / page_size` frames.
    ///
    /// Geometry is validated at configuration time; this constructor assumes
    /// a positive page size dividing the machine size.
    pub fn new(machine_size: u64, page_size: u64, algorithm: Algorithm) -> Self {
        let frame_count = (machine_size / page_size) as usize;

        let policy: Box<dyn ReplacementPolicy> = match algorithm {
            Algorithm::Lru => Box::new(LruPolicy),
            Algorithm::Fifo => Box::new(FifoPolicy),
            Algorithm::Random => Box::new(RandomPolicy),
        };

        Self {
            page_size,
            frames: vec![Frame::default(); frame_count],
            free_cursor: frame_count.checked_sub(1),
            policy,
            stats: BTreeMap::new(),
            trace_paging: false,
        }
    }

    /// Enables per-reference logging through `tracing` at debug level.
    pub fn with_trace_paging(mut self, trace_paging: bool) -> Self {
        self.trace_paging = trace_paging;
        self
    }

    /// Resolves one reference by `pid` to `vaddr` at time `now`.
    ///
    /// On a hit the matching frame's access stamp is updated and nothing
    /// else changes. On a miss the fault is satisfied from a free slot while
    /// any remain, and through the replacement policy afterward.
    ///
    /// # Errors
    ///
    /// `RandomExhausted` when a random eviction cannot draw, and
    /// `EmptyFrameTable` if a victim search runs against a table with no
    /// resident pages (unreachable in a correctly driven simulation).
    pub fn reference(
        &mut self,
        vaddr: VirtAddr,
        pid: Pid,
        now: Tick,
        random: &mut RandomSource,
    ) -> Result<()> {
        let page = vaddr.page(self.page_size);

        if let Some(idx) = self.lookup(page, pid) {
            if self.trace_paging {
                debug!(
                    target: "paging",
                    "process {pid} references word {vaddr} (page {page}) at time {now}: hit in frame {idx}"
                );
            }
            self.frames[idx].touch(now);
            return Ok(());
        }

        self.fault(page, pid, now, random)
    }

    /// Linear scan for the frame holding `(page, pid)`.
    fn lookup(&self, page: PageId, pid: Pid) -> Option<usize> {
        self.frames.iter().position(|f| f.holds(page, pid))
    }

    /// Handles a miss: free-slot fill while the cursor lasts, eviction after.
    fn fault(
        &mut self,
        page: PageId,
        pid: Pid,
        now: Tick,
        random: &mut RandomSource,
    ) -> Result<()> {
        if let Some(idx) = self.free_cursor {
            if self.trace_paging {
                debug!(
                    target: "paging",
                    "process {pid} references page {page} at time {now}: fault, using free frame {idx}"
                );
            }
            self.stats.entry(pid).or_default().page_fault_count += 1;
            self.frames[idx].load(page, pid, now);
            self.free_cursor = idx.checked_sub(1);
            return Ok(());
        }

        let victim_idx = self.policy.select_victim(&self.frames, random)?;
        self.evict_into(victim_idx, page, pid, now);
        Ok(())
    }

    /// Records stats for both sides of an eviction, then overwrites the
    /// victim frame wholesale.
    fn evict_into(&mut self, victim_idx: usize, page: PageId, pid: Pid, now: Tick) {
        if let Some(outgoing) = self.frames[victim_idx].resident().copied() {
            if self.trace_paging {
                debug!(
                    target: "paging",
                    "process {pid} faults on page {page} at time {now}: evicting page {} of process {} from frame {victim_idx}",
                    outgoing.page, outgoing.owner
                );
            }
            let outgoing_stats = self.stats.entry(outgoing.owner).or_default();
            outgoing_stats.eviction_count += 1;
            outgoing_stats.sum_residency_time += outgoing.residency_until(now);
        }

        self.stats.entry(pid).or_default().page_fault_count += 1;
        self.frames[victim_idx].load(page, pid, now);
    }

    /// Number of frames in the table.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Number of never-filled frames remaining.
    pub fn free_frames(&self) -> usize {
        self.free_cursor.map_or(0, |idx| idx + 1)
    }

    /// Read-only view of the frame table.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Read-only view of the per-process counters accumulated so far.
    pub fn stats(&self) -> &BTreeMap<Pid, ProcessStats> {
        &self.stats
    }

    /// Consumes the pager into the final report.
    pub fn into_report(self) -> SimulationReport {
        SimulationReport::new(self.stats)
    }
}

impl std::fmt::Debug for Pager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("page_size", &self.page_size)
            .field("frame_count", &self.frames.len())
            .field("free_cursor", &self.free_cursor)
            .finish_non_exhaustive()
    }
}
