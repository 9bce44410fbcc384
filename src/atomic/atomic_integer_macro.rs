/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integer Macro
//!
//! Provides a macro to generate extremum-capable atomic integer types with
//! consistent implementations.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate an atomic integer type.
///
/// # Parameters
///
/// * `$name` - The name of the atomic type (e.g., `AtomicI32`)
/// * `$inner_type` - The underlying std atomic type (e.g.,
///   `std::sync::atomic::AtomicI32`)
/// * `$value_type` - The value type (e.g., `i32`)
/// * `$doc_type` - The type description for documentation (e.g., "32-bit
///   signed integer")
macro_rules! impl_atomic_integer {
    ($name:ident, $inner_type:ty, $value_type:ty, $doc_type:expr) => {
        #[doc = concat!("Atomic ", $doc_type, " with fetch-max and fetch-min.")]
        ///
        /// # Memory Ordering
        ///
        /// - `load` uses `Acquire`, `store` uses `Release`, `swap` and
        ///   `compare_set` use `AcqRel` (`Acquire` on failure).
        /// - `fetch_max` / `fetch_min` use `SeqCst`. The `_explicit` forms
        ///   accept any [`MemoryOrder`](crate::MemoryOrder), including
        ///   `Consume`.
        ///
        /// The default forms run [`DefaultStrategy`](crate::DefaultStrategy);
        /// `fetch_max_with` / `fetch_min_with` name a strategy explicitly.
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use prism3_atomic_extremum::", stringify!($name), ";")]
        /// use std::sync::Arc;
        /// use std::thread;
        ///
        #[doc = concat!("let peak = Arc::new(", stringify!($name), "::new(0));")]
        /// let handles: Vec<_> = (1..=4)
        ///     .map(|i| {
        ///         let peak = peak.clone();
        ///         thread::spawn(move || {
        ///             peak.fetch_max(i * 10);
        ///         })
        ///     })
        ///     .collect();
        ///
        /// for handle in handles {
        ///     handle.join().unwrap();
        /// }
        ///
        /// assert_eq!(peak.load(), 40);
        /// ```
        ///
        /// # Author
        ///
        /// Haixing Hu
        #[repr(transparent)]
        pub struct $name {
            inner: $inner_type,
        }

        impl $name {
            /// Creates a new atomic integer.
            ///
            /// # Parameters
            ///
            /// * `value` - The initial value.
            #[inline]
            pub const fn new(value: $value_type) -> Self {
                Self {
                    inner: <$inner_type>::new(value),
                }
            }

            /// Loads the current value with `Acquire` ordering.
            #[inline]
            pub fn load(&self) -> $value_type {
                self.inner.load(Ordering::Acquire)
            }

            /// Stores a new value with `Release` ordering.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value to store.
            #[inline]
            pub fn store(&self, value: $value_type) {
                self.inner.store(value, Ordering::Release);
            }

            /// Swaps the current value with a new value, returning the old
            /// value. Uses `AcqRel` ordering.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value to swap in.
            ///
            /// # Returns
            ///
            /// The old value.
            #[inline]
            pub fn swap(&self, value: $value_type) -> $value_type {
                self.inner.swap(value, Ordering::AcqRel)
            }

            /// Compares and sets the value atomically.
            ///
            /// Uses `AcqRel` ordering on success and `Acquire` ordering on
            /// failure.
            ///
            /// # Parameters
            ///
            /// * `current` - The expected current value.
            /// * `new` - The new value to set if current matches.
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
                        current,
                        new,
                        Ordering::AcqRel,
                        Ordering::Acquire,
                    )
                    .map(|_| ())
            }

            /// Sets the value to the maximum of the current value and the
            /// given value, returning the old value.
            ///
            /// # Memory Ordering
            ///
            /// Uses `SeqCst`. The update is a full read-modify-write even
            /// when the stored value already dominates `value`.
            ///
            /// # Parameters
            ///
            /// * `value` - The value to compare with.
            ///
            /// # Returns
            ///
            /// The value observed immediately before the operation.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_extremum::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// assert_eq!(atomic.fetch_max(20), 10);
            /// assert_eq!(atomic.fetch_max(15), 20);
            /// assert_eq!(atomic.load(), 20);
            /// ```
            #[inline]
            pub fn fetch_max(&self, value: $value_type) -> $value_type {
                self.fetch_max_explicit(value, MemoryOrder::SeqCst)
            }

            /// Sets the value to the minimum of the current value and the
            /// given value, returning the old value.
            ///
            /// Uses `SeqCst` ordering.
            ///
            /// # Parameters
            ///
            /// * `value` - The value to compare with.
            ///
            /// # Returns
            ///
            /// The value observed immediately before the operation.
            #[inline]
            pub fn fetch_min(&self, value: $value_type) -> $value_type {
                self.fetch_min_explicit(value, MemoryOrder::SeqCst)
            }

            /// Fetch-max with an explicit memory ordering.
            ///
            /// # Parameters
            ///
            /// * `value` - The value to compare with.
            /// * `order` - Ordering of the whole read-modify-write.
            #[inline]
            pub fn fetch_max_explicit(
                &self,
                value: $value_type,
                order: MemoryOrder,
            ) -> $value_type {
                self.fetch_max_with::<DefaultStrategy>(value, order)
            }

            /// Fetch-min with an explicit memory ordering.
            ///
            /// # Parameters
            ///
            /// * `value` - The value to compare with.
            /// * `order` - Ordering of the whole read-modify-write.
            #[inline]
            pub fn fetch_min_explicit(
                &self,
                value: $value_type,
                order: MemoryOrder,
            ) -> $value_type {
                self.fetch_min_with::<DefaultStrategy>(value, order)
            }

            /// Fetch-max running the strategy `S`.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_extremum::{", stringify!($name), ", MemoryOrder, Strong};")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// let old = atomic.fetch_max_with::<Strong>(30, MemoryOrder::AcqRel);
            /// assert_eq!(old, 10);
            /// assert_eq!(atomic.load(), 30);
            /// ```
            #[inline]
            pub fn fetch_max_with<S: Strategy>(
                &self,
                value: $value_type,
                order: MemoryOrder,
            ) -> $value_type {
                S::fetch_extremum(&self.inner, value, order, Extremum::Max)
            }

            /// Fetch-min running the strategy `S`.
            #[inline]
            pub fn fetch_min_with<S: Strategy>(
                &self,
                value: $value_type,
                order: MemoryOrder,
            ) -> $value_type {
                S::fetch_extremum(&self.inner, value, order, Extremum::Min)
            }

            /// Gets a reference to the underlying standard library atomic
            /// type.
            ///
            /// The reference is itself an [`AtomicLocation`], so the free
            /// functions of this crate accept it too.
            ///
            /// # Returns
            ///
            #[doc = concat!("A reference to the underlying `", stringify!($inner_type), "`.")]
            #[inline]
            pub fn inner(&self) -> &$inner_type {
                &self.inner
            }

            /// Consumes the atomic and returns the contained value.
            #[inline]
            pub fn into_inner(self) -> $value_type {
                self.inner.into_inner()
            }
        }

        impl AtomicLocation for $name {
            type Value = $value_type;

            #[inline]
            fn atomic_load(&self, order: Ordering) -> $value_type {
                self.inner.atomic_load(order)
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
                    .atomic_compare_exchange_weak(current, new, success, failure)
            }

            #[inline]
            fn atomic_fetch_nop(&self, order: Ordering) -> $value_type {
                self.inner.atomic_fetch_nop(order)
            }

            #[inline]
            fn native_cell(&self) -> Option<NativeCell<'_>> {
                self.inner.native_cell()
            }
        }

        // Forwards to the inherent methods so that both direct calls and
        // generic `T: AtomicExtremum` code work.
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
                Self::new(0)
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

pub(crate) use impl_atomic_integer;
