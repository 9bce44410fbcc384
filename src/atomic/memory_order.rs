/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Memory Order
//!
//! Provides the ordering vocabulary used by the extremum operations and the
//! reduction rules that derive the ordering of the load phase from the
//! ordering requested for the whole read-modify-write.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::native::InstructionForm;

/// Memory ordering requested for an extremum operation.
///
/// Mirrors the six orderings of the C++ memory model. `Consume` has no
/// counterpart in `std::sync::atomic::Ordering`; it is promoted to
/// `Acquire` whenever a primitive operation is issued.
///
/// # Author
///
/// Haixing Hu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemoryOrder {
    /// No ordering constraints, only atomicity.
    Relaxed,
    /// Data-dependent acquire. Treated as `Acquire`.
    Consume,
    /// Acquire semantics for the read part of the operation.
    Acquire,
    /// Release semantics for the write part of the operation.
    Release,
    /// Both acquire and release semantics.
    AcqRel,
    /// Acquire-release plus a single total order over all `SeqCst`
    /// operations.
    SeqCst,
}

impl MemoryOrder {
    /// All orderings, weakest first.
    pub const ALL: [MemoryOrder; 6] = [
        MemoryOrder::Relaxed,
        MemoryOrder::Consume,
        MemoryOrder::Acquire,
        MemoryOrder::Release,
        MemoryOrder::AcqRel,
        MemoryOrder::SeqCst,
    ];

    /// Reduces this ordering to the one required by a load that precedes a
    /// possibly skipped store.
    ///
    /// `Release` becomes `Relaxed` and `AcqRel` becomes `Acquire`; every
    /// other ordering is returned unchanged. A load may never carry release
    /// semantics, so this is also the ordering used for the failure path of
    /// every compare-and-exchange issued by the strategies.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_extremum::MemoryOrder;
    ///
    /// assert_eq!(MemoryOrder::Release.load_order(), MemoryOrder::Relaxed);
    /// assert_eq!(MemoryOrder::AcqRel.load_order(), MemoryOrder::Acquire);
    /// assert_eq!(MemoryOrder::SeqCst.load_order(), MemoryOrder::SeqCst);
    /// ```
    #[inline]
    pub const fn load_order(self) -> MemoryOrder {
        match self {
            MemoryOrder::Release => MemoryOrder::Relaxed,
            MemoryOrder::AcqRel => MemoryOrder::Acquire,
            other => other,
        }
    }

    /// Converts to the standard library ordering.
    ///
    /// `Consume` is promoted to `Acquire`.
    #[inline]
    pub const fn to_std(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed => Ordering::Relaxed,
            MemoryOrder::Consume | MemoryOrder::Acquire => Ordering::Acquire,
            MemoryOrder::Release => Ordering::Release,
            MemoryOrder::AcqRel => Ordering::AcqRel,
            MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }

    /// Standard library ordering for the load phase, see
    /// [`load_order`](Self::load_order).
    #[inline]
    pub const fn load_std(self) -> Ordering {
        self.load_order().to_std()
    }

    /// Standard library ordering for the failure path of a
    /// compare-and-exchange whose success ordering is `self`.
    #[inline]
    pub const fn failure_order(self) -> Ordering {
        self.load_std()
    }

    /// Returns `true` if this ordering promises release semantics on the
    /// store.
    ///
    /// A strategy that elides its store owes a compensating read-modify-write
    /// exactly for these orderings.
    #[inline]
    pub const fn releases(self) -> bool {
        matches!(
            self,
            MemoryOrder::Release | MemoryOrder::AcqRel | MemoryOrder::SeqCst
        )
    }

    /// Instruction form used by native load-and-operate instructions.
    #[inline]
    pub const fn instruction_form(self) -> InstructionForm {
        match self {
            MemoryOrder::Relaxed => InstructionForm::Plain,
            MemoryOrder::Consume | MemoryOrder::Acquire => InstructionForm::Acquire,
            MemoryOrder::Release => InstructionForm::Release,
            MemoryOrder::AcqRel | MemoryOrder::SeqCst => InstructionForm::AcqRel,
        }
    }
}

impl Default for MemoryOrder {
    #[inline]
    fn default() -> Self {
        MemoryOrder::SeqCst
    }
}

impl From<Ordering> for MemoryOrder {
    /// Orderings added to the standard library later map to `SeqCst`.
    #[inline]
    fn from(order: Ordering) -> Self {
        match order {
            Ordering::Relaxed => MemoryOrder::Relaxed,
            Ordering::Acquire => MemoryOrder::Acquire,
            Ordering::Release => MemoryOrder::Release,
            Ordering::AcqRel => MemoryOrder::AcqRel,
            _ => MemoryOrder::SeqCst,
        }
    }
}

impl From<MemoryOrder> for Ordering {
    #[inline]
    fn from(order: MemoryOrder) -> Self {
        order.to_std()
    }
}

impl fmt::Display for MemoryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MemoryOrder::Relaxed => "relaxed",
            MemoryOrder::Consume => "consume",
            MemoryOrder::Acquire => "acquire",
            MemoryOrder::Release => "release",
            MemoryOrder::AcqRel => "acq_rel",
            MemoryOrder::SeqCst => "seq_cst",
        };
        f.write_str(name)
    }
}
