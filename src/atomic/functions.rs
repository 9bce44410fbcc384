/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Free Functions
//!
//! Fetch-max and fetch-min for any [`AtomicLocation`]: the crate's wrapper
//! types, and standard library atomics borrowed from wherever they live.
//!
//! ```rust
//! use std::sync::atomic::AtomicUsize;
//!
//! use prism3_atomic_extremum::fetch_max;
//!
//! struct Ring {
//!     high_water: AtomicUsize,
//! }
//!
//! let ring = Ring { high_water: AtomicUsize::new(0) };
//! fetch_max(&ring.high_water, 17);
//! fetch_max(&ring.high_water, 9);
//! assert_eq!(ring.high_water.into_inner(), 17);
//! ```
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::element::Extremum;
use crate::atomic::memory_order::MemoryOrder;
use crate::atomic::strategy::{
    DefaultStrategy,
    Strategy,
};
use crate::atomic::traits::AtomicLocation;

/// `true`: fetch-max and fetch-min are available for every element type.
pub const HAS_FETCH_MAX_MIN: bool = true;

/// `true` when the build target executes fetch-max and fetch-min on
/// integers and pointers as single native instructions under the
/// `Hardware` strategy.
pub const HARDWARE_FETCH_MAX_MIN: bool = crate::atomic::native::AVAILABLE;

/// Sets `location` to the maximum of its value and `value` with `SeqCst`
/// ordering, returning the previous value.
#[inline]
pub fn fetch_max<L>(location: &L, value: L::Value) -> L::Value
where
    L: AtomicLocation + ?Sized,
{
    fetch_max_explicit(location, value, MemoryOrder::SeqCst)
}

/// Sets `location` to the minimum of its value and `value` with `SeqCst`
/// ordering, returning the previous value.
#[inline]
pub fn fetch_min<L>(location: &L, value: L::Value) -> L::Value
where
    L: AtomicLocation + ?Sized,
{
    fetch_min_explicit(location, value, MemoryOrder::SeqCst)
}

/// [`fetch_max`] with an explicit memory ordering.
#[inline]
pub fn fetch_max_explicit<L>(location: &L, value: L::Value, order: MemoryOrder) -> L::Value
where
    L: AtomicLocation + ?Sized,
{
    DefaultStrategy::fetch_extremum(location, value, order, Extremum::Max)
}

/// [`fetch_min`] with an explicit memory ordering.
#[inline]
pub fn fetch_min_explicit<L>(location: &L, value: L::Value, order: MemoryOrder) -> L::Value
where
    L: AtomicLocation + ?Sized,
{
    DefaultStrategy::fetch_extremum(location, value, order, Extremum::Min)
}

/// [`fetch_max_explicit`] running the strategy `S`.
#[inline]
pub fn fetch_max_with<S, L>(location: &L, value: L::Value, order: MemoryOrder) -> L::Value
where
    S: Strategy,
    L: AtomicLocation + ?Sized,
{
    S::fetch_extremum(location, value, order, Extremum::Max)
}

/// [`fetch_min_explicit`] running the strategy `S`.
#[inline]
pub fn fetch_min_with<S, L>(location: &L, value: L::Value, order: MemoryOrder) -> L::Value
where
    S: Strategy,
    L: AtomicLocation + ?Sized,
{
    S::fetch_extremum(location, value, order, Extremum::Min)
}

/// Fetch-max through a raw location pointer.
///
/// # Aborts
///
/// Aborts the process if `location` is null. This is a precondition
/// violation, not a recoverable error, and there is no unwinding so the
/// function stays usable where panics are not.
///
/// # Safety
///
/// A non-null `location` must point to a live `L` for the duration of the
/// call.
#[inline]
pub unsafe fn fetch_max_raw<L>(location: *const L, value: L::Value, order: MemoryOrder) -> L::Value
where
    L: AtomicLocation,
{
    // SAFETY: forwarded to the caller.
    let location = unsafe { require_location(location) };
    fetch_max_explicit(location, value, order)
}

/// Fetch-min through a raw location pointer.
///
/// # Aborts
///
/// Aborts the process if `location` is null.
///
/// # Safety
///
/// A non-null `location` must point to a live `L` for the duration of the
/// call.
#[inline]
pub unsafe fn fetch_min_raw<L>(location: *const L, value: L::Value, order: MemoryOrder) -> L::Value
where
    L: AtomicLocation,
{
    // SAFETY: forwarded to the caller.
    let location = unsafe { require_location(location) };
    fetch_min_explicit(location, value, order)
}

/// # Safety
///
/// A non-null `location` must point to a live `L` for `'a`.
#[inline]
unsafe fn require_location<'a, L>(location: *const L) -> &'a L {
    // SAFETY: a non-null pointer is live per the caller's contract.
    match unsafe { location.as_ref() } {
        Some(location) => location,
        None => null_location(),
    }
}

#[cold]
#[inline(never)]
fn null_location() -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!("null atomic location passed to fetch_max/fetch_min");
    std::process::abort()
}
