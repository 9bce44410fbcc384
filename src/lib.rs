/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic-extremum
//!
//! Lock-free atomic fetch-max and fetch-min with a selectable store and
//! ordering strategy.
//!
//! `fetch_max` and `fetch_min` behave like every other atomic
//! read-modify-write: one indivisible step that returns the previous value
//! and honors the requested memory ordering, even when the stored value
//! does not change.
//!
//! ## Design Goals
//!
//! - **Conformance**: every strategy exposed is observably a full
//!   read-modify-write under every ordering
//! - **Low contention**: the default strategy does not take the cache line
//!   exclusively when the operand cannot change the stored value
//! - **Zero cost selection**: strategies are types, chosen at the call site
//!   or by Cargo feature, never per call at run time
//! - **Native instructions**: used where the target provides them
//!
//! ## Features
//!
//! - Integer atomic types: `AtomicI8`, `AtomicU8`, `AtomicI16`, `AtomicU16`,
//!   `AtomicI32`, `AtomicU32`, `AtomicI64`, `AtomicU64`, `AtomicIsize`,
//!   `AtomicUsize`
//! - Floating-point atomic types: `AtomicF32`, `AtomicF64`
//! - Pointer atomic type ordered by address: `AtomicPtr<T>`
//! - Free functions over any `AtomicLocation`, including borrowed
//!   `std::sync::atomic` types
//!
//! ## Cargo Features
//!
//! - `tracing`: trace events for ordering compensation and hardware
//!   fallback
//! - `strong-default`: use `Strong` as `DefaultStrategy`
//! - `hardware-default`: use `Hardware` as `DefaultStrategy`
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_extremum::{AtomicI32, MemoryOrder};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let high_water = Arc::new(AtomicI32::new(-1));
//! let mut handles = vec![];
//!
//! for i in 0..8 {
//!     let high_water = high_water.clone();
//!     handles.push(thread::spawn(move || {
//!         high_water.fetch_max_explicit(i, MemoryOrder::AcqRel)
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(high_water.load(), 7);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;

// Re-export the public surface
pub use atomic::{
    fetch_max,
    fetch_max_explicit,
    fetch_max_raw,
    fetch_max_with,
    fetch_min,
    fetch_min_explicit,
    fetch_min_raw,
    fetch_min_with,
    AtomicExtremum,
    AtomicF32,
    AtomicF64,
    AtomicI16,
    AtomicI32,
    AtomicI64,
    AtomicI8,
    AtomicIsize,
    AtomicLocation,
    AtomicPtr,
    AtomicU16,
    AtomicU32,
    AtomicU64,
    AtomicU8,
    AtomicUsize,
    DefaultStrategy,
    Element,
    Extremum,
    Hardware,
    MemoryOrder,
    NativeCell,
    NativeShape,
    Smart,
    Strategy,
    StrategyKind,
    Strong,
    HARDWARE_FETCH_MAX_MIN,
    HAS_FETCH_MAX_MIN,
};
