/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integers
//!
//! Signed and unsigned atomic integers of every standard width. All of them
//! have a native form on targets with load-and-operate instructions.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;
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

impl_atomic_integer!(AtomicI8, std::sync::atomic::AtomicI8, i8, "8-bit signed integer");
impl_atomic_integer!(AtomicU8, std::sync::atomic::AtomicU8, u8, "8-bit unsigned integer");
impl_atomic_integer!(AtomicI16, std::sync::atomic::AtomicI16, i16, "16-bit signed integer");
impl_atomic_integer!(AtomicU16, std::sync::atomic::AtomicU16, u16, "16-bit unsigned integer");
impl_atomic_integer!(AtomicI32, std::sync::atomic::AtomicI32, i32, "32-bit signed integer");
impl_atomic_integer!(AtomicU32, std::sync::atomic::AtomicU32, u32, "32-bit unsigned integer");
impl_atomic_integer!(AtomicI64, std::sync::atomic::AtomicI64, i64, "64-bit signed integer");
impl_atomic_integer!(AtomicU64, std::sync::atomic::AtomicU64, u64, "64-bit unsigned integer");
impl_atomic_integer!(
    AtomicIsize,
    std::sync::atomic::AtomicIsize,
    isize,
    "pointer-sized signed integer"
);
impl_atomic_integer!(
    AtomicUsize,
    std::sync::atomic::AtomicUsize,
    usize,
    "pointer-sized unsigned integer"
);
