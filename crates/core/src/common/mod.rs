//! Common types shared throughout the paging simulator.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Address Types:** Strong types for virtual addresses and page identities.
//! 2. **Identifiers:** Process id and simulated-time aliases.
//! 3. **Error Handling:** The crate-wide error taxonomy.

/// Address and identifier type definitions.
pub mod addr;

/// Error types for configuration, resource, and invariant failures.
pub mod error;

pub use addr::{PageId, Pid, Tick, VirtAddr};
pub use error::{Result, SimError};
