/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Peak Tracking Example
//!
//! Demonstrates the wrapper types: latency extremes with `AtomicF64`,
//! a signed range with `AtomicI32`, and the furthest slot reached with
//! `AtomicPtr`.

use prism3_atomic_extremum::{
    AtomicF64,
    AtomicI32,
    AtomicPtr,
    Hardware,
    MemoryOrder,
    StrategyKind,
    HARDWARE_FETCH_MAX_MIN,
};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Peak Tracking Example ===\n");

    // Example 1: Latency extremes
    println!("1. Latency Extremes:");
    let fastest = Arc::new(AtomicF64::new(f64::INFINITY));
    let slowest = Arc::new(AtomicF64::new(0.0));
    let mut handles = vec![];

    for worker in 0..4 {
        let fastest = fastest.clone();
        let slowest = slowest.clone();
        handles.push(thread::spawn(move || {
            for request in 0..250 {
                let millis = 1.0 + ((worker * 37 + request * 11) % 97) as f64 / 4.0;
                fastest.fetch_min(millis);
                slowest.fetch_max(millis);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!("   Fastest: {:.2} ms", fastest.load());
    println!("   Slowest: {:.2} ms", slowest.load());

    // NaN samples are ignored
    slowest.fetch_max(f64::NAN);
    println!("   Slowest after a NaN sample: {:.2} ms", slowest.load());

    // Example 2: Signed range
    println!("\n2. Temperature Range:");
    let low = AtomicI32::new(i32::MAX);
    let high = AtomicI32::new(i32::MIN);
    for reading in [12, -4, 7, 21, -11, 3] {
        low.fetch_min_explicit(reading, MemoryOrder::Relaxed);
        high.fetch_max_explicit(reading, MemoryOrder::Relaxed);
    }
    println!("   Range: {} .. {}", low, high);

    // Example 3: Furthest slot
    println!("\n3. Furthest Slot:");
    let mut slots = [0u8; 16];
    let base = slots.as_mut_ptr();
    let furthest = AtomicPtr::new(base);
    for index in [3, 9, 5, 14, 2] {
        furthest.fetch_max_with::<Hardware>(base.wrapping_add(index), MemoryOrder::AcqRel);
    }
    println!(
        "   Furthest index: {}",
        furthest.load() as usize - base as usize
    );
    println!(
        "   {} strategy runs natively on this target: {}",
        StrategyKind::Hardware,
        HARDWARE_FETCH_MAX_MIN
    );

    println!("\n=== Example completed ===");
}
