/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_extremum::{
    AtomicF32,
    AtomicF64,
    Hardware,
    MemoryOrder,
    Smart,
    Strong,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_f32_fetch_min_sequence() {
    let atomic = AtomicF32::new(10.5);
    assert_eq!(atomic.fetch_min(3.25), 10.5);
    assert_eq!(atomic.fetch_min(7.0), 3.25);
    assert_eq!(atomic.load(), 3.25);
}

#[test]
fn test_f64_fetch_min_sequence() {
    let atomic = AtomicF64::new(10.5);
    assert_eq!(atomic.fetch_min(3.25), 10.5);
    assert_eq!(atomic.fetch_min(7.0), 3.25);
    assert_eq!(atomic.load(), 3.25);
}

#[test]
fn test_f64_fetch_max() {
    let atomic = AtomicF64::new(-2.5);
    assert_eq!(atomic.fetch_max(1.5), -2.5);
    assert_eq!(atomic.fetch_max(0.5), 1.5);
    assert_eq!(atomic.fetch_max(f64::INFINITY), 1.5);
    assert_eq!(atomic.load(), f64::INFINITY);
}

#[test]
fn test_nan_operand_is_ignored() {
    for order in MemoryOrder::ALL {
        let atomic = AtomicF32::new(1.0);
        assert_eq!(atomic.fetch_max_explicit(f32::NAN, order), 1.0);
        assert_eq!(atomic.fetch_min_with::<Strong>(f32::NAN, order), 1.0);
        assert_eq!(atomic.fetch_max_with::<Hardware>(f32::NAN, order), 1.0);
        assert_eq!(atomic.load(), 1.0);
    }
}

#[test]
fn test_stored_nan_is_kept() {
    let atomic = AtomicF64::new(f64::NAN);
    assert!(atomic.fetch_max(5.0).is_nan());
    assert!(atomic.fetch_min_with::<Strong>(-5.0, MemoryOrder::SeqCst).is_nan());
    assert!(atomic.fetch_min_with::<Smart>(-5.0, MemoryOrder::Relaxed).is_nan());
    assert!(atomic.load().is_nan());
}

#[test]
fn test_signed_zero_keeps_stored() {
    let atomic = AtomicF32::new(0.0);
    atomic.fetch_min(-0.0);
    assert!(atomic.load().is_sign_positive());

    let atomic = AtomicF32::new(-0.0);
    atomic.fetch_max(0.0);
    assert!(atomic.load().is_sign_negative());
}

#[test]
fn test_infinities() {
    let atomic = AtomicF32::new(0.0);
    atomic.fetch_min(f32::NEG_INFINITY);
    assert_eq!(atomic.fetch_max(f32::INFINITY), f32::NEG_INFINITY);
    assert_eq!(atomic.load(), f32::INFINITY);
}

#[test]
fn test_compare_set_uses_bits() {
    let atomic = AtomicF64::new(0.0);
    assert_eq!(atomic.compare_set(-0.0, 1.0), Err(0.0));
    assert!(atomic.compare_set(0.0, 1.0).is_ok());
    assert_eq!(atomic.swap(2.0), 1.0);
    atomic.store(4.0);
    assert_eq!(atomic.into_inner(), 4.0);
}

#[test]
fn test_default_display_debug() {
    let atomic = AtomicF32::default();
    assert_eq!(atomic.load(), 0.0);
    atomic.store(1.5);
    assert_eq!(format!("{}", atomic), "1.5");
    assert_eq!(format!("{:?}", atomic), "AtomicF32 { value: 1.5 }");
    assert_eq!(AtomicF64::from(2.0).load(), 2.0);
}

#[test]
fn test_concurrent_f64_max() {
    let atomic = Arc::new(AtomicF64::new(0.0));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let atomic = atomic.clone();
            thread::spawn(move || {
                for step in 0..100 {
                    atomic.fetch_max(i as f64 + step as f64 / 100.0);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(atomic.load(), 7.0 + 99.0 / 100.0);
}
