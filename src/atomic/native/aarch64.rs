/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! AArch64 LSE rows: `LD{S,U}{MAX,MIN}{,A,L,AL}{B,H,}`.

use super::Table;

// Emits one function per (mnemonic, ordering suffix, size suffix) and
// collects them as a `[width][form]` block.
macro_rules! lse_family {
    ($family:ident, $mnemonic:literal) => {
        mod $family {
            use std::ptr::NonNull;

            use super::super::{EmitFn, FORMS, WIDTHS};

            lse_family!(@emit b_plain, $mnemonic, "", "b", "w");
            lse_family!(@emit b_acquire, $mnemonic, "a", "b", "w");
            lse_family!(@emit b_release, $mnemonic, "l", "b", "w");
            lse_family!(@emit b_acq_rel, $mnemonic, "al", "b", "w");
            lse_family!(@emit h_plain, $mnemonic, "", "h", "w");
            lse_family!(@emit h_acquire, $mnemonic, "a", "h", "w");
            lse_family!(@emit h_release, $mnemonic, "l", "h", "w");
            lse_family!(@emit h_acq_rel, $mnemonic, "al", "h", "w");
            lse_family!(@emit w_plain, $mnemonic, "", "", "w");
            lse_family!(@emit w_acquire, $mnemonic, "a", "", "w");
            lse_family!(@emit w_release, $mnemonic, "l", "", "w");
            lse_family!(@emit w_acq_rel, $mnemonic, "al", "", "w");
            lse_family!(@emit x_plain, $mnemonic, "", "", "x");
            lse_family!(@emit x_acquire, $mnemonic, "a", "", "x");
            lse_family!(@emit x_release, $mnemonic, "l", "", "x");
            lse_family!(@emit x_acq_rel, $mnemonic, "al", "", "x");

            pub(in crate::atomic::native) const BLOCK: [[Option<EmitFn>; FORMS]; WIDTHS] = [
                [Some(b_plain), Some(b_acquire), Some(b_release), Some(b_acq_rel)],
                [Some(h_plain), Some(h_acquire), Some(h_release), Some(h_acq_rel)],
                [Some(w_plain), Some(w_acquire), Some(w_release), Some(w_acq_rel)],
                [Some(x_plain), Some(x_acquire), Some(x_release), Some(x_acq_rel)],
            ];
        }
    };
    (@emit $name:ident, $mnemonic:literal, $order:literal, $size:literal, $reg:literal) => {
        unsafe fn $name(dst: NonNull<u8>, operand: u64) -> u64 {
            let previous: u64;
            // SAFETY: the caller upholds the `EmitFn` contract, so `dst` is a
            // live, aligned atomic cell of the width encoded in the mnemonic.
            unsafe {
                core::arch::asm!(
                    concat!(
                        $mnemonic, $order, $size,
                        " {operand:", $reg, "}, {previous:", $reg, "}, [{dst}]"
                    ),
                    operand = in(reg) operand,
                    previous = out(reg) previous,
                    dst = in(reg) dst.as_ptr(),
                    options(nostack, preserves_flags),
                );
            }
            previous
        }
    };
}

lse_family!(signed_max, "ldsmax");
lse_family!(unsigned_max, "ldumax");
lse_family!(signed_min, "ldsmin");
lse_family!(unsigned_min, "ldumin");

pub(super) const TABLE: Table = [
    [signed_max::BLOCK, unsigned_max::BLOCK],
    [signed_min::BLOCK, unsigned_min::BLOCK],
];
