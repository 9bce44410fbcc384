/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Pointer
//!
//! Provides an atomic raw pointer whose extremum operations order pointers
//! by address, as unsigned integers.
//!
//! On the native path of the `Hardware` strategy the previous pointer is
//! rebuilt from its address with exposed-provenance semantics.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::AtomicPtr as StdAtomicPtr;
use std::sync::atomic::Ordering;

use crate::atomic::element::Extremum;
use crate::atomic::memory_order::MemoryOrder;
use crate::atomic::strategy::{
    DefaultStrategy,
    Strategy,
};
use crate::atomic::traits::{
    AtomicExtremum,
    AtomicLocation,
    NativeCell,
};

/// Atomic raw pointer with fetch-max and fetch-min by address.
///
/// Never dereferences the stored pointers. Typical uses are keeping the
/// lowest or highest address seen inside one allocation, e.g. the furthest
/// slot claimed in a ring buffer.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_extremum::AtomicPtr;
///
/// let mut slots = [0u64; 4];
/// let base = slots.as_mut_ptr();
///
/// let furthest = AtomicPtr::new(base);
/// furthest.fetch_max(base.wrapping_add(2));
/// furthest.fetch_max(base.wrapping_add(1));
/// assert_eq!(furthest.load(), base.wrapping_add(2));
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicPtr<T> {
    inner: StdAtomicPtr<T>,
}

impl<T> AtomicPtr<T> {
    /// Creates a new atomic pointer.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial pointer.
    #[inline]
    pub const fn new(value: *mut T) -> Self {
        Self {
            inner: StdAtomicPtr::new(value),
        }
    }

    /// Creates an atomic null pointer.
    #[inline]
    pub const fn null() -> Self {
        Self::new(std::ptr::null_mut())
    }

    /// Loads the current pointer with `Acquire` ordering.
    #[inline]
    pub fn load(&self) -> *mut T {
        self.inner.load(Ordering::Acquire)
    }

    /// Stores a new pointer with `Release` ordering.
    #[inline]
    pub fn store(&self, value: *mut T) {
        self.inner.store(value, Ordering::Release);
    }

    /// Swaps the current pointer, returning the old one. Uses `AcqRel`.
    #[inline]
    pub fn swap(&self, value: *mut T) -> *mut T {
        self.inner.swap(value, Ordering::AcqRel)
    }

    /// Compares and sets the pointer atomically.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` on failure.
    #[inline]
    pub fn compare_set(&self, current: *mut T, new: *mut T) -> Result<(), *mut T> {
        self.inner
            .compare_exchange(current, new, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
    }

    /// Keeps the higher address, returning the previous pointer. Uses
    /// `SeqCst`.
    #[inline]
    pub fn fetch_max(&self, value: *mut T) -> *mut T {
        self.fetch_max_explicit(value, MemoryOrder::SeqCst)
    }

    /// Keeps the lower address, returning the previous pointer. Uses
    /// `SeqCst`.
    #[inline]
    pub fn fetch_min(&self, value: *mut T) -> *mut T {
        self.fetch_min_explicit(value, MemoryOrder::SeqCst)
    }

    /// Fetch-max with an explicit memory ordering.
    #[inline]
    pub fn fetch_max_explicit(&self, value: *mut T, order: MemoryOrder) -> *mut T {
        self.fetch_max_with::<DefaultStrategy>(value, order)
    }

    /// Fetch-min with an explicit memory ordering.
    #[inline]
    pub fn fetch_min_explicit(&self, value: *mut T, order: MemoryOrder) -> *mut T {
        self.fetch_min_with::<DefaultStrategy>(value, order)
    }

    /// Fetch-max running the strategy `S`.
    #[inline]
    pub fn fetch_max_with<S: Strategy>(&self, value: *mut T, order: MemoryOrder) -> *mut T {
        S::fetch_extremum(&self.inner, value, order, Extremum::Max)
    }

    /// Fetch-min running the strategy `S`.
    #[inline]
    pub fn fetch_min_with<S: Strategy>(&self, value: *mut T, order: MemoryOrder) -> *mut T {
        S::fetch_extremum(&self.inner, value, order, Extremum::Min)
    }

    /// Gets a reference to the underlying standard library atomic pointer.
    #[inline]
    pub fn inner(&self) -> &StdAtomicPtr<T> {
        &self.inner
    }

    /// Consumes the atomic and returns the contained pointer.
    #[inline]
    pub fn into_inner(self) -> *mut T {
        self.inner.into_inner()
    }
}

impl<T> AtomicLocation for AtomicPtr<T> {
    type Value = *mut T;

    #[inline]
    fn atomic_load(&self, order: Ordering) -> *mut T {
        self.inner.atomic_load(order)
    }

    #[inline]
    fn atomic_compare_exchange_weak(
        &self,
        current: *mut T,
        new: *mut T,
        success: Ordering,
        failure: Ordering,
    ) -> Result<*mut T, *mut T> {
        self.inner
            .atomic_compare_exchange_weak(current, new, success, failure)
    }

    #[inline]
    fn atomic_fetch_nop(&self, order: Ordering) -> *mut T {
        self.inner.atomic_fetch_nop(order)
    }

    #[inline]
    fn native_cell(&self) -> Option<NativeCell<'_>> {
        self.inner.native_cell()
    }
}

impl<T> AtomicExtremum for AtomicPtr<T> {
    type Value = *mut T;

    #[inline]
    fn fetch_max(&self, value: *mut T) -> *mut T {
        self.fetch_max(value)
    }

    #[inline]
    fn fetch_min(&self, value: *mut T) -> *mut T {
        self.fetch_min(value)
    }

    #[inline]
    fn fetch_max_explicit(&self, value: *mut T, order: MemoryOrder) -> *mut T {
        self.fetch_max_explicit(value, order)
    }

    #[inline]
    fn fetch_min_explicit(&self, value: *mut T, order: MemoryOrder) -> *mut T {
        self.fetch_min_explicit(value, order)
    }
}

impl<T> Default for AtomicPtr<T> {
    #[inline]
    fn default() -> Self {
        Self::null()
    }
}

impl<T> From<*mut T> for AtomicPtr<T> {
    #[inline]
    fn from(value: *mut T) -> Self {
        Self::new(value)
    }
}

impl<T> fmt::Debug for AtomicPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicPtr")
            .field("value", &self.load())
            .finish()
    }
}

impl<T> fmt::Pointer for AtomicPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.load(), f)
    }
}
