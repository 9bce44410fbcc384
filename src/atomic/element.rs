/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Element Types
//!
//! Defines the value domain of the extremum operations: two's-complement
//! integers, pointers ordered by address, and floating-point numbers.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::mem;

/// Which extremum an operation computes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extremum {
    /// Keep the larger value.
    Max,
    /// Keep the smaller value.
    Min,
}

impl fmt::Display for Extremum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extremum::Max => f.write_str("max"),
            Extremum::Min => f.write_str("min"),
        }
    }
}

/// Operand width of a native load-and-operate instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// 1 byte.
    W8,
    /// 2 bytes.
    W16,
    /// 4 bytes.
    W32,
    /// 8 bytes.
    W64,
}

impl Width {
    /// Maps an operand size in bytes to its width.
    ///
    /// # Panics
    ///
    /// Panics for any size other than 1, 2, 4 or 8. Used from constant
    /// contexts only, where the panic is a compile error.
    pub const fn from_size(bytes: usize) -> Width {
        match bytes {
            1 => Width::W8,
            2 => Width::W16,
            4 => Width::W32,
            8 => Width::W64,
            _ => panic!("unsupported operand width for a native extremum"),
        }
    }

    /// Size of the operand in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            Width::W8 => 1,
            Width::W16 => 2,
            Width::W32 => 4,
            Width::W64 => 8,
        }
    }
}

/// How the hardware compares operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signedness {
    /// Two's-complement comparison.
    Signed,
    /// Unsigned comparison. Also used for pointer addresses.
    Unsigned,
}

/// Width and signedness of an element as seen by native instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NativeShape {
    /// Operand width.
    pub width: Width,
    /// Comparison kind.
    pub signedness: Signedness,
}

impl NativeShape {
    /// Shape of `T` with the given signedness.
    pub const fn of<T>(signedness: Signedness) -> NativeShape {
        NativeShape {
            width: Width::from_size(mem::size_of::<T>()),
            signedness,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A value that can be stored in an extremum-capable atomic location.
///
/// Sealed: implemented for the primitive integers, `f32`, `f64` and
/// `*mut T`.
///
/// # Author
///
/// Haixing Hu
pub trait Element: Copy + fmt::Debug + sealed::Sealed {
    /// Shape used by native instructions, or `None` if no native
    /// instruction can operate on this type.
    const NATIVE: Option<NativeShape>;

    /// Combines `self` (the operand) with `current` (the stored value).
    ///
    /// Returns `current` when the operand is not strictly more extreme, so
    /// an unordered operand never replaces the stored value.
    fn extremum(self, current: Self, op: Extremum) -> Self;

    /// Identity of representation. Bit equality for floats, so a stored
    /// NaN is equal to itself.
    fn same_as(self, other: Self) -> bool;

    /// Widens the representation to 64 bits for native dispatch.
    fn to_raw(self) -> u64;

    /// Narrows a native result back to the element type.
    fn from_raw(raw: u64) -> Self;
}

macro_rules! impl_integer_element {
    ($signedness:ident => $($value_type:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $value_type {}

            impl Element for $value_type {
                const NATIVE: Option<NativeShape> =
                    Some(NativeShape::of::<$value_type>(Signedness::$signedness));

                #[inline]
                fn extremum(self, current: Self, op: Extremum) -> Self {
                    match op {
                        Extremum::Max if self > current => self,
                        Extremum::Min if self < current => self,
                        _ => current,
                    }
                }

                #[inline]
                fn same_as(self, other: Self) -> bool {
                    self == other
                }

                #[inline]
                fn to_raw(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn from_raw(raw: u64) -> Self {
                    raw as $value_type
                }
            }
        )*
    };
}

impl_integer_element!(Signed => i8, i16, i32, i64, isize);
impl_integer_element!(Unsigned => u8, u16, u32, u64, usize);

macro_rules! impl_float_element {
    ($($value_type:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $value_type {}

            impl Element for $value_type {
                const NATIVE: Option<NativeShape> = None;

                // NaN compares false both ways: a NaN operand is dropped and
                // a stored NaN stays.
                #[inline]
                fn extremum(self, current: Self, op: Extremum) -> Self {
                    match op {
                        Extremum::Max if self > current => self,
                        Extremum::Min if self < current => self,
                        _ => current,
                    }
                }

                #[inline]
                fn same_as(self, other: Self) -> bool {
                    self.to_bits() == other.to_bits()
                }

                #[inline]
                fn to_raw(self) -> u64 {
                    self.to_bits() as u64
                }

                #[inline]
                fn from_raw(raw: u64) -> Self {
                    <$value_type>::from_bits(raw as _)
                }
            }
        )*
    };
}

impl_float_element!(f32, f64);

impl<T> sealed::Sealed for *mut T {}

impl<T> Element for *mut T {
    const NATIVE: Option<NativeShape> =
        Some(NativeShape::of::<*mut T>(Signedness::Unsigned));

    #[inline]
    fn extremum(self, current: Self, op: Extremum) -> Self {
        let (operand, stored) = (self as usize, current as usize);
        match op {
            Extremum::Max if operand > stored => self,
            Extremum::Min if operand < stored => self,
            _ => current,
        }
    }

    #[inline]
    fn same_as(self, other: Self) -> bool {
        self == other
    }

    #[inline]
    fn to_raw(self) -> u64 {
        self as usize as u64
    }

    // Address-only round trip. The native path rebuilds the previous pointer
    // from its address with exposed-provenance semantics; the instruction
    // itself is opaque to the compiler and may expose any stored pointer.
    #[inline]
    fn from_raw(raw: u64) -> Self {
        raw as usize as *mut T
    }
}
