//! Physical frame slots.
//!
//! A frame is either empty or holds exactly one resident page; the
//! `Option<ResidentPage>` representation makes partial states unrepresentable.
//! Slots are created empty at machine startup, populated on first load,
//! overwritten wholesale on eviction, and reused for the lifetime of the run.

use crate::common::{PageId, Pid, Tick};

/// A page resident in some frame, with its bookkeeping stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidentPage {
    /// Identity of the resident page.
    pub page: PageId,
    /// Process that owns the resident page.
    pub owner: Pid,
    /// Tick the page was installed. Never re-stamped by hits; FIFO victim
    /// selection orders by this stamp alone.
    pub loaded_at: Tick,
    /// Tick of the most recent hit or load. LRU victim selection and
    /// residency accounting both read this stamp.
    pub last_access_at: Tick,
}

impl ResidentPage {
    /// Ticks this page was resident, measured from its last access to the
    /// given eviction time.
    pub fn residency_until(&self, evicted_at: Tick) -> Tick {
        evicted_at - self.last_access_at
    }
}

/// One physical frame slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    resident: Option<ResidentPage>,
}

impl Frame {
    /// The resident page, if the slot is populated.
    pub fn resident(&self) -> Option<&ResidentPage> {
        self.resident.as_ref()
    }

    /// True while no page has ever been loaded into the slot.
    pub fn is_empty(&self) -> bool {
        self.resident.is_none()
    }

    /// True when the slot holds `page` on behalf of `owner`.
    pub fn holds(&self, page: PageId, owner: Pid) -> bool {
        self.resident
            .is_some_and(|r| r.page == page && r.owner == owner)
    }

    /// Re-stamps the access time on a hit. Empty slots are left untouched.
    pub fn touch(&mut self, now: Tick) {
        if let Some(resident) = self.resident.as_mut() {
            resident.last_access_at = now;
        }
    }

    /// Overwrites the slot wholesale with a freshly loaded page.
    pub fn load(&mut self, page: PageId, owner: Pid, now: Tick) {
        self.resident = Some(ResidentPage {
            page,
            owner,
            loaded_at: now,
            last_access_at: now,
        });
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.resident {
            Some(r) => write!(f, "Frame: process id {} page id {}", r.owner, r.page),
            None => write!(f, "Frame: empty"),
        }
    }
}
