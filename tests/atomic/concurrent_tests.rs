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
    fetch_max_with,
    fetch_min_with,
    AtomicI32,
    Hardware,
    MemoryOrder,
    Smart,
    Strategy,
    Strong,
};
use std::sync::atomic::{
    AtomicI64 as StdAtomicI64,
    AtomicUsize as StdAtomicUsize,
    Ordering,
};
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

const NUM_THREADS: usize = 8;
const ITERATIONS_PER_THREAD: usize = 1000;

// Eight threads race fetch_max(i) on a value starting at -1
#[test]
fn test_racing_fetch_max_is_linearizable() {
    for order in MemoryOrder::ALL {
        let atomic = Arc::new(AtomicI32::new(-1));
        let barrier = Arc::new(Barrier::new(NUM_THREADS));
        let handles: Vec<_> = (0..NUM_THREADS as i32)
            .map(|i| {
                let atomic = atomic.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    (i, atomic.fetch_max_explicit(i, order))
                })
            })
            .collect();

        let results: Vec<(i32, i32)> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(atomic.load(), 7, "{order}");

        // Operand i was stored exactly when the thread saw something smaller.
        let stored: Vec<i32> = results
            .iter()
            .filter(|(operand, previous)| previous < operand)
            .map(|(operand, _)| *operand)
            .collect();
        assert!(stored.contains(&7));
        assert_eq!(
            results.iter().filter(|(_, previous)| *previous == -1).count(),
            1,
            "only the first operation can observe the initial value"
        );
        for (operand, previous) in &results {
            assert_ne!(operand, previous);
            assert!(
                *previous == -1 || stored.contains(previous),
                "{previous} was returned but never stored"
            );
        }
    }
}

#[test]
fn test_racing_fetch_min_is_linearizable() {
    let atomic = Arc::new(AtomicI32::new(NUM_THREADS as i32));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let handles: Vec<_> = (0..NUM_THREADS as i32)
        .map(|i| {
            let atomic = atomic.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                (i, atomic.fetch_min(i))
            })
        })
        .collect();

    let results: Vec<(i32, i32)> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(atomic.load(), 0);
    let stored: Vec<i32> = results
        .iter()
        .filter(|(operand, previous)| previous > operand)
        .map(|(operand, _)| *operand)
        .collect();
    for (_, previous) in &results {
        assert!(*previous == NUM_THREADS as i32 || stored.contains(previous));
    }
}

fn race_strategy<S: Strategy + 'static>(order: MemoryOrder) {
    let high = Arc::new(StdAtomicI64::new(i64::MIN));
    let low = Arc::new(StdAtomicI64::new(i64::MAX));
    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|t| {
            let high = high.clone();
            let low = low.clone();
            thread::spawn(move || {
                let mut seed = t as i64 * 7919 + 1;
                for _ in 0..ITERATIONS_PER_THREAD {
                    seed = (seed * 1103515245 + 12345) % 1_000_003;
                    let value = seed - 500_000;
                    let previous = fetch_max_with::<S, _>(&*high, value, order);
                    assert!(high.load(Ordering::SeqCst) >= previous.max(value));
                    fetch_min_with::<S, _>(&*low, value, order);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let mut expected_high = i64::MIN;
    let mut expected_low = i64::MAX;
    for t in 0..NUM_THREADS {
        let mut seed = t as i64 * 7919 + 1;
        for _ in 0..ITERATIONS_PER_THREAD {
            seed = (seed * 1103515245 + 12345) % 1_000_003;
            expected_high = expected_high.max(seed - 500_000);
            expected_low = expected_low.min(seed - 500_000);
        }
    }
    assert_eq!(high.load(Ordering::SeqCst), expected_high);
    assert_eq!(low.load(Ordering::SeqCst), expected_low);
}

#[test]
fn test_every_strategy_under_contention() {
    for order in [MemoryOrder::Relaxed, MemoryOrder::AcqRel, MemoryOrder::SeqCst] {
        race_strategy::<Strong>(order);
        race_strategy::<Smart>(order);
        race_strategy::<Hardware>(order);
        race_strategy::<Hardware<Strong>>(order);
    }
}

// Records the deepest a shared queue got while every producer is inside it
#[test]
fn test_high_water_mark() {
    let depth = Arc::new(StdAtomicUsize::new(0));
    let high_water = Arc::new(StdAtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let depth = depth.clone();
            let high_water = high_water.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                let now = depth.fetch_add(1, Ordering::SeqCst) + 1;
                fetch_max(&*high_water, now);
                barrier.wait();
                depth.fetch_sub(1, Ordering::SeqCst);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(depth.load(Ordering::SeqCst), 0);
    assert_eq!(high_water.load(Ordering::SeqCst), NUM_THREADS);
}
