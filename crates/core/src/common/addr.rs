//! Virtual address and page identity types.
//!
//! Strong types prevent accidental mixing of word addresses and page numbers:
//! a `VirtAddr` is a word offset inside a process's virtual space, while a
//! `PageId` is that address divided down by the machine's page size. Only the
//! pager performs the conversion, so the page size appears in exactly one
//! place.

/// A process identifier. Processes are numbered from 1 in creation order.
pub type Pid = u32;

/// A point in simulated time. The clock advances by one tick per memory
/// reference, starting at 1; tick 0 is reserved for "before the run".
pub type Tick = u64;

/// A virtual word address inside one process's address space.
///
/// Addresses are process-relative: two processes may reference the same
/// `VirtAddr` and touch unrelated pages, because page identity includes the
/// owning process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct VirtAddr(pub u64);

/// The identity of a virtual page within one process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageId(pub u64);

impl VirtAddr {
    /// Creates a new virtual address from a raw word offset.
    #[inline]
    pub fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw word offset.
    #[inline]
    pub fn val(&self) -> u64 {
        self.0
    }

    /// Converts this address into the page that contains it.
    ///
    /// # Arguments
    ///
    /// * `page_size` - Words per page; must be non-zero (validated at
    ///   configuration time).
    #[inline]
    pub fn page(&self, page_size: u64) -> PageId {
        PageId(self.0 / page_size)
    }
}

impl PageId {
    /// Returns the raw page number.
    #[inline]
    pub fn val(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for VirtAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
