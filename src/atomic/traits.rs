/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines the primitive interface every atomic location exposes to the
//! extremum strategies, and the caller-facing extremum trait.
//!
//! # Author
//!
//! Haixing Hu

use std::marker::PhantomData;
use std::ptr::NonNull;
use std::sync::atomic::Ordering;

use crate::atomic::element::{
    Element,
    NativeShape,
};
use crate::atomic::memory_order::MemoryOrder;

/// Address of an atomic cell that native instructions may operate on,
/// together with the shape of the value actually stored there.
///
/// Only this crate can create a `NativeCell`, and it does so exclusively
/// for standard library atomics, taking the shape from the atomic's own
/// value type. A location may hand out the cell of a different atomic; the
/// `Hardware` strategy then sees a shape mismatch and takes its software
/// path.
#[derive(Clone, Copy, Debug)]
pub struct NativeCell<'a> {
    address: NonNull<u8>,
    shape: NativeShape,
    _location: PhantomData<&'a ()>,
}

impl<'a> NativeCell<'a> {
    #[inline]
    fn from_ptr<V: Element>(ptr: *mut V, _location: &'a impl Sized) -> Option<Self> {
        let shape = V::NATIVE?;
        NonNull::new(ptr.cast::<u8>()).map(|address| NativeCell {
            address,
            shape,
            _location: PhantomData,
        })
    }

    /// Width and signedness of the value stored in the cell.
    #[inline]
    pub fn shape(self) -> NativeShape {
        self.shape
    }

    #[inline]
    pub(crate) fn address(self) -> NonNull<u8> {
        self.address
    }
}

/// Primitive operations of a shared atomic location.
///
/// These are the only accesses the strategies perform. Implementations must
/// give each method the semantics of the corresponding standard library
/// atomic operation.
///
/// Implementing this trait for an instrumented type is the intended way to
/// observe which primitives a strategy issues.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicLocation {
    /// The value type stored in the location.
    type Value: Element;

    /// Atomically loads the value.
    ///
    /// `order` is never `Release` or `AcqRel`.
    fn atomic_load(&self, order: Ordering) -> Self::Value;

    /// Weak compare-and-exchange. May fail spuriously.
    ///
    /// Returns `Ok(previous)` on success and `Err(actual)` on failure.
    /// Equality is identity of representation.
    fn atomic_compare_exchange_weak(
        &self,
        current: Self::Value,
        new: Self::Value,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self::Value, Self::Value>;

    /// A read-modify-write that leaves the value unchanged, such as
    /// `fetch_add(0)`. Returns the value read.
    fn atomic_fetch_nop(&self, order: Ordering) -> Self::Value;

    /// Address for native instructions, if this location supports them.
    #[inline]
    fn native_cell(&self) -> Option<NativeCell<'_>> {
        None
    }
}

impl<L: AtomicLocation + ?Sized> AtomicLocation for &L {
    type Value = L::Value;

    #[inline]
    fn atomic_load(&self, order: Ordering) -> Self::Value {
        (**self).atomic_load(order)
    }

    #[inline]
    fn atomic_compare_exchange_weak(
        &self,
        current: Self::Value,
        new: Self::Value,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self::Value, Self::Value> {
        (**self).atomic_compare_exchange_weak(current, new, success, failure)
    }

    #[inline]
    fn atomic_fetch_nop(&self, order: Ordering) -> Self::Value {
        (**self).atomic_fetch_nop(order)
    }

    #[inline]
    fn native_cell(&self) -> Option<NativeCell<'_>> {
        (**self).native_cell()
    }
}

macro_rules! impl_std_location {
    ($($std_type:ty => $value_type:ty),* $(,)?) => {
        $(
            impl AtomicLocation for $std_type {
                type Value = $value_type;

                #[inline]
                fn atomic_load(&self, order: Ordering) -> $value_type {
                    self.load(order)
                }

                #[inline]
                fn atomic_compare_exchange_weak(
                    &self,
                    current: $value_type,
                    new: $value_type,
                    success: Ordering,
                    failure: Ordering,
                ) -> Result<$value_type, $value_type> {
                    self.compare_exchange_weak(current, new, success, failure)
                }

                #[inline]
                fn atomic_fetch_nop(&self, order: Ordering) -> $value_type {
                    self.fetch_add(0, order)
                }

                #[inline]
                fn native_cell(&self) -> Option<NativeCell<'_>> {
                    NativeCell::from_ptr(self.as_ptr(), self)
                }
            }
        )*
    };
}

impl_std_location!(
    std::sync::atomic::AtomicI8 => i8,
    std::sync::atomic::AtomicI16 => i16,
    std::sync::atomic::AtomicI32 => i32,
    std::sync::atomic::AtomicI64 => i64,
    std::sync::atomic::AtomicIsize => isize,
    std::sync::atomic::AtomicU8 => u8,
    std::sync::atomic::AtomicU16 => u16,
    std::sync::atomic::AtomicU32 => u32,
    std::sync::atomic::AtomicU64 => u64,
    std::sync::atomic::AtomicUsize => usize,
);

impl<T> AtomicLocation for std::sync::atomic::AtomicPtr<T> {
    type Value = *mut T;

    #[inline]
    fn atomic_load(&self, order: Ordering) -> *mut T {
        self.load(order)
    }

    #[inline]
    fn atomic_compare_exchange_weak(
        &self,
        current: *mut T,
        new: *mut T,
        success: Ordering,
        failure: Ordering,
    ) -> Result<*mut T, *mut T> {
        self.compare_exchange_weak(current, new, success, failure)
    }

    // `AtomicPtr` has no stable `fetch_add`; a successful same-value CAS is
    // the equivalent no-op read-modify-write.
    #[inline]
    fn atomic_fetch_nop(&self, order: Ordering) -> *mut T {
        let failure = MemoryOrder::from(order).failure_order();
        let mut current = self.load(failure);
        loop {
            match self.compare_exchange_weak(current, current, order, failure) {
                Ok(previous) => return previous,
                Err(actual) => current = actual,
            }
        }
    }

    #[inline]
    fn native_cell(&self) -> Option<NativeCell<'_>> {
        NativeCell::from_ptr(self.as_ptr(), self)
    }
}

/// Caller-facing extremum operations of an atomic type.
///
/// Implemented by the crate's wrapper types by forwarding to their inherent
/// methods, so generic code can be written once for integers, floats and
/// pointers.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicExtremum {
    /// The value type stored in the atomic.
    type Value;

    /// Sets the value to the maximum of the current value and `value`,
    /// returning the previous value. Uses `SeqCst` ordering.
    fn fetch_max(&self, value: Self::Value) -> Self::Value;

    /// Sets the value to the minimum of the current value and `value`,
    /// returning the previous value. Uses `SeqCst` ordering.
    fn fetch_min(&self, value: Self::Value) -> Self::Value;

    /// Like [`fetch_max`](Self::fetch_max) with an explicit ordering.
    fn fetch_max_explicit(&self, value: Self::Value, order: MemoryOrder) -> Self::Value;

    /// Like [`fetch_min`](Self::fetch_min) with an explicit ordering.
    fn fetch_min_explicit(&self, value: Self::Value, order: MemoryOrder) -> Self::Value;
}
