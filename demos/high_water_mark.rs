/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # High-Water Mark Example
//!
//! Demonstrates tracking the deepest a shared queue gets with `fetch_max`
//! on a plain `std::sync::atomic::AtomicUsize` field.

use prism3_atomic_extremum::{
    fetch_max,
    fetch_max_with,
    MemoryOrder,
    Strong,
};
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};
use std::sync::{
    Arc,
    Mutex,
};
use std::thread;

struct TrackedQueue {
    items: Mutex<Vec<u32>>,
    depth: AtomicUsize,
    high_water: AtomicUsize,
}

impl TrackedQueue {
    fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            depth: AtomicUsize::new(0),
            high_water: AtomicUsize::new(0),
        }
    }

    fn push(&self, item: u32) {
        self.items.lock().unwrap().push(item);
        let depth = self.depth.fetch_add(1, Ordering::Relaxed) + 1;
        fetch_max(&self.high_water, depth);
    }

    fn pop(&self) -> Option<u32> {
        let item = self.items.lock().unwrap().pop();
        if item.is_some() {
            self.depth.fetch_sub(1, Ordering::Relaxed);
        }
        item
    }
}

fn main() {
    println!("=== High-Water Mark Example ===\n");

    // Example 1: Single-threaded high-water mark
    println!("1. Single-threaded Queue:");
    let queue = TrackedQueue::new();
    for i in 0..5 {
        queue.push(i);
    }
    queue.pop();
    queue.pop();
    queue.push(99);
    println!(
        "   Depth: {}, high-water mark: {}",
        queue.depth.load(Ordering::Relaxed),
        queue.high_water.load(Ordering::Relaxed)
    );

    // Example 2: Producers and consumers
    println!("\n2. Producers and Consumers:");
    let queue = Arc::new(TrackedQueue::new());
    let mut handles = vec![];

    for producer in 0..4 {
        let queue = queue.clone();
        handles.push(thread::spawn(move || {
            for i in 0..1000 {
                queue.push(producer * 1000 + i);
            }
        }));
    }
    for _ in 0..2 {
        let queue = queue.clone();
        handles.push(thread::spawn(move || {
            let mut taken = 0;
            while taken < 2000 {
                if queue.pop().is_some() {
                    taken += 1;
                } else {
                    thread::yield_now();
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!(
        "   Depth: {}, high-water mark: {}",
        queue.depth.load(Ordering::Relaxed),
        queue.high_water.load(Ordering::Relaxed)
    );

    // Example 3: Choosing the strategy
    println!("\n3. Strong Strategy:");
    let mark = AtomicUsize::new(10);
    let previous = fetch_max_with::<Strong, _>(&mark, 3, MemoryOrder::Release);
    println!(
        "   Previous: {}, now: {} (stored even though unchanged)",
        previous,
        mark.load(Ordering::Relaxed)
    );

    println!("\n=== Example completed ===");
}
