/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Extremum
//!
//! Atomic fetch-max and fetch-min for integers, pointers and floating-point
//! numbers, with a choice of algorithms:
//!
//! - `Strong` - unconditional compare-and-exchange loop
//! - `Smart` - skips the store when it cannot change the value, and
//!   compensates the ordering when it does so (the default)
//! - `Hardware` - native load-and-operate instruction where available
//!
//! # Author
//!
//! Haixing Hu

mod atomic_float;
mod atomic_integer_macro;
mod atomic_integers;
mod atomic_ptr;
mod element;
mod functions;
mod memory_order;
pub mod native;
mod strategy;
mod traits;

pub use atomic_float::{
    AtomicF32,
    AtomicF64,
};
pub use atomic_integers::{
    AtomicI16,
    AtomicI32,
    AtomicI64,
    AtomicI8,
    AtomicIsize,
    AtomicU16,
    AtomicU32,
    AtomicU64,
    AtomicU8,
    AtomicUsize,
};
pub use atomic_ptr::AtomicPtr;
pub use element::{
    Element,
    Extremum,
    NativeShape,
    Signedness,
    Width,
};
pub use functions::{
    fetch_max,
    fetch_max_explicit,
    fetch_max_raw,
    fetch_max_with,
    fetch_min,
    fetch_min_explicit,
    fetch_min_raw,
    fetch_min_with,
    HARDWARE_FETCH_MAX_MIN,
    HAS_FETCH_MAX_MIN,
};
pub use memory_order::MemoryOrder;
pub use strategy::{
    DefaultStrategy,
    Hardware,
    Smart,
    Strategy,
    StrategyKind,
    Strong,
};
pub use traits::{
    AtomicExtremum,
    AtomicLocation,
    NativeCell,
};
