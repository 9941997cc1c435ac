//! Per-process statistics collection and aggregation.
//!
//! The pager maintains these counters as a side effect of every fault and
//! eviction; nothing here is sampled or estimated. The report offers
//! read-only accessors only; formatting and display belong to the caller.
//!
//! Average residency is a quotient, not a counter: with zero evictions it is
//! undefined, never zero, and the accessors return `Option` to keep callers
//! honest about that.

use std::collections::BTreeMap;

use crate::common::Pid;

/// Counters aggregated for one process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessStats {
    /// Page faults charged to the process, including initial loads into free
    /// frames.
    pub page_fault_count: u64,
    /// Times a page owned by the process was evicted.
    pub eviction_count: u64,
    /// Ticks the process's pages spent resident before being evicted,
    /// summed over all its evictions.
    pub sum_residency_time: u64,
}

impl ProcessStats {
    /// Average ticks of residency per eviction, or `None` with zero
    /// evictions.
    pub fn average_residency(&self) -> Option<f64> {
        if self.eviction_count == 0 {
            None
        } else {
            Some(self.sum_residency_time as f64 / self.eviction_count as f64)
        }
    }
}

/// Final statistics of a completed run, keyed by process id.
///
/// Backed by an ordered map so iteration (and therefore reporting) is in pid
/// order, deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationReport {
    per_process: BTreeMap<Pid, ProcessStats>,
}

impl SimulationReport {
    /// Wraps the pager's accumulated counters.
    pub fn new(per_process: BTreeMap<Pid, ProcessStats>) -> Self {
        Self { per_process }
    }

    /// Stats for one process, if it ever faulted or was evicted.
    pub fn process(&self, pid: Pid) -> Option<&ProcessStats> {
        self.per_process.get(&pid)
    }

    /// All per-process stats in ascending pid order.
    pub fn processes(&self) -> impl Iterator<Item = (Pid, &ProcessStats)> {
        self.per_process.iter().map(|(pid, stats)| (*pid, stats))
    }

    /// Faults summed over every process.
    pub fn total_faults(&self) -> u64 {
        self.per_process.values().map(|s| s.page_fault_count).sum()
    }

    /// Evictions summed over every process.
    pub fn total_evictions(&self) -> u64 {
        self.per_process.values().map(|s| s.eviction_count).sum()
    }

    /// Residency ticks summed over every process.
    pub fn total_residency_time(&self) -> u64 {
        self.per_process
            .values()
            .map(|s| s.sum_residency_time)
            .sum()
    }

    /// Run-wide average residency, or `None` when nothing was ever evicted.
    pub fn overall_average_residency(&self) -> Option<f64> {
        let evictions = self.total_evictions();
        if evictions == 0 {
            None
        } else {
            Some(self.total_residency_time() as f64 / evictions as f64)
        }
    }
}
