/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_extremum::{
    fetch_max,
    fetch_min_explicit,
    AtomicExtremum,
    AtomicPtr,
    Hardware,
    MemoryOrder,
    Strong,
};
use std::sync::atomic::AtomicPtr as StdAtomicPtr;
use std::sync::Arc;
use std::thread;

#[test]
fn test_fetch_max_by_address() {
    let mut slots = [0u32; 8];
    let base = slots.as_mut_ptr();

    let atomic = AtomicPtr::new(base.wrapping_add(3));
    assert_eq!(atomic.fetch_max(base.wrapping_add(5)), base.wrapping_add(3));
    assert_eq!(atomic.fetch_max(base.wrapping_add(1)), base.wrapping_add(5));
    assert_eq!(atomic.load(), base.wrapping_add(5));
}

#[test]
fn test_fetch_min_by_address() {
    let mut slots = [0u32; 8];
    let base = slots.as_mut_ptr();

    let atomic = AtomicPtr::new(base.wrapping_add(3));
    assert_eq!(atomic.fetch_min(base.wrapping_add(6)), base.wrapping_add(3));
    assert_eq!(atomic.fetch_min(base), base.wrapping_add(3));
    assert_eq!(atomic.load(), base);
}

#[test]
fn test_null_is_lowest_address() {
    let mut value = 1u8;
    let atomic: AtomicPtr<u8> = AtomicPtr::default();
    assert!(atomic.fetch_max(&mut value).is_null());
    assert_eq!(atomic.load(), &mut value as *mut u8);
    assert_eq!(atomic.fetch_min(std::ptr::null_mut()), &mut value as *mut u8);
    assert!(atomic.into_inner().is_null());
}

#[test]
fn test_strategies_and_orders() {
    let mut slots = [0u16; 4];
    let base = slots.as_mut_ptr();

    for order in MemoryOrder::ALL {
        let atomic = AtomicPtr::new(base.wrapping_add(1));
        assert_eq!(
            atomic.fetch_max_with::<Strong>(base.wrapping_add(2), order),
            base.wrapping_add(1)
        );
        assert_eq!(
            atomic.fetch_min_with::<Hardware>(base, order),
            base.wrapping_add(2)
        );
        assert_eq!(atomic.fetch_max_explicit(base, order), base);
        assert_eq!(atomic.fetch_min_explicit(base.wrapping_add(3), order), base);
        assert_eq!(atomic.load(), base);
    }
}

#[test]
fn test_std_atomic_ptr_location() {
    let mut slots = [0u64; 4];
    let base = slots.as_mut_ptr();

    let std_atomic = StdAtomicPtr::new(base.wrapping_add(2));
    assert_eq!(fetch_max(&std_atomic, base.wrapping_add(3)), base.wrapping_add(2));
    // Elided store with SeqCst goes through the same-value CAS no-op.
    assert_eq!(fetch_max(&std_atomic, base), base.wrapping_add(3));
    assert_eq!(
        fetch_min_explicit(&std_atomic, base, MemoryOrder::Release),
        base.wrapping_add(3)
    );
    assert_eq!(std_atomic.into_inner(), base);
}

#[test]
fn test_trait_and_compare_set() {
    fn lower<A: AtomicExtremum>(atomic: &A, value: A::Value) -> A::Value {
        atomic.fetch_min_explicit(value, MemoryOrder::AcqRel)
    }

    let mut slots = [0u8; 4];
    let base = slots.as_mut_ptr();
    let atomic = AtomicPtr::from(base.wrapping_add(2));
    assert_eq!(lower(&atomic, base), base.wrapping_add(2));
    assert!(atomic.compare_set(base, base.wrapping_add(1)).is_ok());
    assert_eq!(atomic.compare_set(base, base), Err(base.wrapping_add(1)));
    assert_eq!(atomic.swap(base), base.wrapping_add(1));
    atomic.store(base.wrapping_add(3));
    assert_eq!(format!("{:p}", atomic), format!("{:p}", base.wrapping_add(3)));
}

#[test]
fn test_concurrent_furthest_slot() {
    const SLOTS: usize = 64;

    let mut slots = vec![0u64; SLOTS];
    let base = slots.as_mut_ptr();
    let furthest = Arc::new(AtomicPtr::new(base));
    let base_addr = base as usize;

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let furthest = furthest.clone();
            thread::spawn(move || {
                let base = base_addr as *mut u64;
                for i in (t..SLOTS).step_by(8) {
                    furthest.fetch_max(base.wrapping_add(i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(furthest.load(), base.wrapping_add(SLOTS - 1));
}

#[test]
fn test_hardware_returns_usable_pointers() {
    let mut slots = [10u32, 20, 30, 40];
    let base = slots.as_mut_ptr();

    for order in MemoryOrder::ALL {
        let atomic = AtomicPtr::new(base.wrapping_add(1));
        let previous = atomic.fetch_max_with::<Hardware>(base.wrapping_add(3), order);
        assert_eq!(previous, base.wrapping_add(1));
        // SAFETY: both pointers address live elements of `slots`.
        unsafe {
            assert_eq!(*previous, 20);
            assert_eq!(*atomic.fetch_min_with::<Hardware>(base, order), 40);
            assert_eq!(*atomic.load(), 10);
        }
    }
}
