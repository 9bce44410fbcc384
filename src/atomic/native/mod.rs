/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Native Dispatch
//!
//! Capability table mapping `(operation, signedness, width, instruction
//! form)` to a function that issues the matching native load-and-operate
//! instruction.
//!
//! Each supported target architecture contributes one table module. Targets
//! without such instructions use an empty table, and every lookup misses,
//! which makes the `Hardware` strategy take its software fallback.
//!
//! # Author
//!
//! Haixing Hu

use std::ptr::NonNull;

use crate::atomic::element::{
    Extremum,
    NativeShape,
    Signedness,
    Width,
};

#[cfg(all(target_arch = "aarch64", target_feature = "lse"))]
mod aarch64;

#[cfg(all(target_arch = "aarch64", target_feature = "lse"))]
use aarch64::TABLE;

#[cfg(not(all(target_arch = "aarch64", target_feature = "lse")))]
const TABLE: Table = [[[[None; FORMS]; WIDTHS]; SIGNEDNESSES]; OPERATIONS];

/// `true` when the build target provides native extremum instructions.
pub const AVAILABLE: bool = cfg!(all(target_arch = "aarch64", target_feature = "lse"));

/// Ordering suffix of a native load-and-operate instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionForm {
    /// No ordering.
    Plain,
    /// Acquire on the load.
    Acquire,
    /// Release on the store.
    Release,
    /// Acquire on the load and release on the store.
    AcqRel,
}

/// Issues one native instruction on the cell at `dst` and returns the
/// previous contents, zero- or sign-extension unspecified above the operand
/// width.
///
/// # Safety
///
/// `dst` must point to a live atomic cell of exactly the width the function
/// was registered for, aligned to that width, and only ever accessed
/// atomically.
pub type EmitFn = unsafe fn(dst: NonNull<u8>, operand: u64) -> u64;

const OPERATIONS: usize = 2;
const SIGNEDNESSES: usize = 2;
const WIDTHS: usize = 4;
const FORMS: usize = 4;

/// Dispatch table, indexed as `[operation][signedness][width][form]`.
pub(crate) type Table =
    [[[[Option<EmitFn>; FORMS]; WIDTHS]; SIGNEDNESSES]; OPERATIONS];

#[inline]
const fn operation_index(op: Extremum) -> usize {
    match op {
        Extremum::Max => 0,
        Extremum::Min => 1,
    }
}

#[inline]
const fn signedness_index(signedness: Signedness) -> usize {
    match signedness {
        Signedness::Signed => 0,
        Signedness::Unsigned => 1,
    }
}

#[inline]
const fn width_index(width: Width) -> usize {
    match width {
        Width::W8 => 0,
        Width::W16 => 1,
        Width::W32 => 2,
        Width::W64 => 3,
    }
}

#[inline]
const fn form_index(form: InstructionForm) -> usize {
    match form {
        InstructionForm::Plain => 0,
        InstructionForm::Acquire => 1,
        InstructionForm::Release => 2,
        InstructionForm::AcqRel => 3,
    }
}

/// Looks up the emission function for an operation, or `None` when the
/// target has no native form for it.
#[inline]
pub fn lookup(op: Extremum, shape: NativeShape, form: InstructionForm) -> Option<EmitFn> {
    TABLE[operation_index(op)][signedness_index(shape.signedness)][width_index(shape.width)]
        [form_index(form)]
}
