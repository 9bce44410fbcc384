/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Floating Point
//!
//! Atomic `f32` and `f64` with fetch-max and fetch-min. Implemented on top of
//! `AtomicU32` / `AtomicU64` with bit conversion.
//!
//! # NaN Handling
//!
//! NaN is unordered. A NaN operand never replaces the stored value, and a
//! stored NaN is never replaced by `fetch_max` or `fetch_min`. Compare-and-
//! exchange works on the bit pattern, so a stored NaN does not make the
//! retry loops spin.
//!
//! Positive and negative zero compare equal; whichever is stored stays.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
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
};

macro_rules! impl_atomic_float {
    ($name:ident, $bits_type:ty, $value_type:ty, $doc_type:expr) => {
        #[doc = concat!("Atomic ", $doc_type, " floating point number.")]
        ///
        #[doc = concat!("Stores the bits of an `", stringify!($value_type), "` in an `", stringify!($bits_type), "`.")]
        /// No hardware offers native floating-point extremum instructions, so
        /// the `Hardware` strategy always takes its software fallback here.
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use prism3_atomic_extremum::", stringify!($name), ";")]
        ///
        #[doc = concat!("let low = ", stringify!($name), "::new(10.5);")]
        /// assert_eq!(low.fetch_min(3.25), 10.5);
        /// assert_eq!(low.fetch_min(7.0), 3.25);
        /// assert_eq!(low.load(), 3.25);
        /// ```
        ///
        /// # Author
        ///
        /// Haixing Hu
        #[repr(transparent)]
        pub struct $name {
            inner: $bits_type,
        }

        impl $name {
            /// Creates a new atomic floating point number.
            ///
            /// # Parameters
            ///
            /// * `value` - The initial value.
            #[inline]
            pub fn new(value: $value_type) -> Self {
                Self {
                    inner: <$bits_type>::new(value.to_bits()),
                }
            }

            /// Loads the current value with `Acquire` ordering.
            #[inline]
            pub fn load(&self) -> $value_type {
                <$value_type>::from_bits(self.inner.load(Ordering::Acquire))
            }

            /// Stores a new value with `Release` ordering.
            #[inline]
            pub fn store(&self, value: $value_type) {
                self.inner.store(value.to_bits(), Ordering::Release);
            }

            /// Swaps the current value with a new value, returning the old
            /// value. Uses `AcqRel` ordering.
            #[inline]
            pub fn swap(&self, value: $value_type) -> $value_type {
                <$value_type>::from_bits(self.inner.swap(value.to_bits(), Ordering::AcqRel))
            }

            /// Compares and sets the value atomically.
            ///
            /// The comparison is on the bit pattern: `0.0` does not match
            /// `-0.0`, and a NaN matches a NaN with the same bits.
            ///
            /// # Returns
            ///
            /// `Ok(())` on success, or `Err(actual)` on failure.
            #[inline]
            pub fn compare_set(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> Result<(), $value_type> {
                self.inner
                    .compare_exchange(
                        current.to_bits(),
                        new.to_bits(),
                        Ordering::AcqRel,
                        Ordering::Acquire,
                    )
                    .map(|_| ())
                    .map_err(<$value_type>::from_bits)
            }

            /// Sets the value to the maximum of the current value and the
            /// given value, returning the old value. Uses `SeqCst`.
            ///
            /// A NaN `value` leaves the stored value unchanged.
            #[inline]
            pub fn fetch_max(&self, value: $value_type) -> $value_type {
                self.fetch_max_explicit(value, MemoryOrder::SeqCst)
            }

            /// Sets the value to the minimum of the current value and the
            /// given value, returning the old value. Uses `SeqCst`.
            ///
            /// A NaN `value` leaves the stored value unchanged.
            #[inline]
            pub fn fetch_min(&self, value: $value_type) -> $value_type {
                self.fetch_min_explicit(value, MemoryOrder::SeqCst)
            }

            /// Fetch-max with an explicit memory ordering.
            #[inline]
            pub fn fetch_max_explicit(
                &self,
                value: $value_type,
                order: MemoryOrder,
            ) -> $value_type {
                self.fetch_max_with::<DefaultStrategy>(value, order)
            }

            /// Fetch-min with an explicit memory ordering.
            #[inline]
            pub fn fetch_min_explicit(
                &self,
                value: $value_type,
                order: MemoryOrder,
            ) -> $value_type {
                self.fetch_min_with::<DefaultStrategy>(value, order)
            }

            /// Fetch-max running the strategy `S`.
            #[inline]
            pub fn fetch_max_with<S: Strategy>(
                &self,
                value: $value_type,
                order: MemoryOrder,
            ) -> $value_type {
                S::fetch_extremum(self, value, order, Extremum::Max)
            }

            /// Fetch-min running the strategy `S`.
            #[inline]
            pub fn fetch_min_with<S: Strategy>(
                &self,
                value: $value_type,
                order: MemoryOrder,
            ) -> $value_type {
                S::fetch_extremum(self, value, order, Extremum::Min)
            }

            /// Gets a reference to the underlying bit storage.
            ///
            #[doc = concat!("Use `", stringify!($value_type), "::to_bits()` and `", stringify!($value_type), "::from_bits()` for conversions.")]
            #[inline]
            pub fn inner(&self) -> &$bits_type {
                &self.inner
            }

            /// Consumes the atomic and returns the contained value.
            #[inline]
            pub fn into_inner(self) -> $value_type {
                <$value_type>::from_bits(self.inner.into_inner())
            }
        }

        impl AtomicLocation for $name {
            type Value = $value_type;

            #[inline]
            fn atomic_load(&self, order: Ordering) -> $value_type {
                <$value_type>::from_bits(self.inner.load(order))
            }

            #[inline]
            fn atomic_compare_exchange_weak(
                &self,
                current: $value_type,
                new: $value_type,
                success: Ordering,
                failure: Ordering,
            ) -> Result<$value_type, $value_type> {
                self.inner
                    .compare_exchange_weak(current.to_bits(), new.to_bits(), success, failure)
                    .map(<$value_type>::from_bits)
                    .map_err(<$value_type>::from_bits)
            }

            #[inline]
            fn atomic_fetch_nop(&self, order: Ordering) -> $value_type {
                <$value_type>::from_bits(self.inner.fetch_add(0, order))
            }
        }

        impl AtomicExtremum for $name {
            type Value = $value_type;

            #[inline]
            fn fetch_max(&self, value: $value_type) -> $value_type {
                self.fetch_max(value)
            }

            #[inline]
            fn fetch_min(&self, value: $value_type) -> $value_type {
                self.fetch_min(value)
            }

            #[inline]
            fn fetch_max_explicit(
                &self,
                value: $value_type,
                order: MemoryOrder,
            ) -> $value_type {
                self.fetch_max_explicit(value, order)
            }

            #[inline]
            fn fetch_min_explicit(
                &self,
                value: $value_type,
                order: MemoryOrder,
            ) -> $value_type {
                self.fetch_min_explicit(value, order)
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(0.0)
            }
        }

        impl From<$value_type> for $name {
            #[inline]
            fn from(value: $value_type) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("value", &self.load())
                    .finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.load())
            }
        }
    };
}

impl_atomic_float!(AtomicF32, std::sync::atomic::AtomicU32, f32, "32-bit");
impl_atomic_float!(AtomicF64, std::sync::atomic::AtomicU64, f64, "64-bit");
