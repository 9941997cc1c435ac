//! # Reference Variant Tests
//!
//! Verifies each address-generation variant and the wrap policy: every
//! result stays within the process's virtual address space.

use proptest::prelude::*;

use pagesim_core::common::VirtAddr;
use pagesim_core::reference::ReferenceKind;

#[test]
fn test_initial_references_designated_start() {
    // Process k starts at (111 * k) mod virtual_size.
    assert_eq!(ReferenceKind::Initial.advance(None, 1, 32), VirtAddr(15));
    assert_eq!(ReferenceKind::Initial.advance(None, 2, 32), VirtAddr(30));
    assert_eq!(ReferenceKind::Initial.advance(None, 1, 1000), VirtAddr(111));
}

#[test]
fn test_initial_ignores_prior() {
    let with_prior = ReferenceKind::Initial.advance(Some(VirtAddr(5)), 1, 32);
    let without = ReferenceKind::Initial.advance(None, 1, 32);
    assert_eq!(with_prior, without);
}

#[test]
fn test_sequential_steps_one_word() {
    let next = ReferenceKind::Sequential.advance(Some(VirtAddr(10)), 1, 32);
    assert_eq!(next, VirtAddr(11));
}

#[test]
fn test_sequential_wraps_to_zero() {
    let next = ReferenceKind::Sequential.advance(Some(VirtAddr(31)), 1, 32);
    assert_eq!(next, VirtAddr(0));
}

#[test]
fn test_backward_steps_one_word() {
    let next = ReferenceKind::Backward.advance(Some(VirtAddr(10)), 1, 32);
    assert_eq!(next, VirtAddr(9));
}

#[test]
fn test_backward_wraps_to_top() {
    let next = ReferenceKind::Backward.advance(Some(VirtAddr(0)), 1, 32);
    assert_eq!(next, VirtAddr(31));
}

#[test]
fn test_jump_hops_half_the_address_space() {
    let next = ReferenceKind::Jump.advance(Some(VirtAddr(3)), 1, 32);
    assert_eq!(next, VirtAddr(19));

    let wrapped = ReferenceKind::Jump.advance(Some(VirtAddr(20)), 1, 32);
    assert_eq!(wrapped, VirtAddr(4));
}

#[test]
fn test_random_maps_draw_modulo_size() {
    let next = ReferenceKind::Random { draw: 100 }.advance(Some(VirtAddr(7)), 1, 32);
    assert_eq!(next, VirtAddr(4));

    // The prior address plays no part.
    let other_prior = ReferenceKind::Random { draw: 100 }.advance(Some(VirtAddr(0)), 1, 32);
    assert_eq!(other_prior, VirtAddr(4));
}

proptest! {
    /// Every variant, from every prior address, lands inside the address space.
    #[test]
    fn prop_advance_stays_in_range(
        prior in 0u64..10_000,
        pid in 1u32..=8,
        size in 1u64..10_000,
        draw in 0u32..=i32::MAX as u32,
    ) {
        let prior = Some(VirtAddr(prior % size));
        for kind in [
            ReferenceKind::Initial,
            ReferenceKind::Sequential,
            ReferenceKind::Backward,
            ReferenceKind::Jump,
            ReferenceKind::Random { draw },
        ] {
            let next = kind.advance(prior, pid, size);
            prop_assert!(next.val() < size);
        }
    }
}
