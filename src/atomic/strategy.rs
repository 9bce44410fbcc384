/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Extremum Strategies
//!
//! Interchangeable algorithms implementing fetch-max and fetch-min on an
//! [`AtomicLocation`]:
//!
//! - [`Strong`]: unconditional compare-and-exchange loop. Always stores,
//!   exactly like every other read-modify-write operation.
//! - `Weak` (crate-internal): skips the store when the operand cannot move
//!   the stored value. Cheaper under contention, but on the skipped path no
//!   release fence happens.
//! - [`Smart`]: `Weak` plus a compensating no-op read-modify-write whenever
//!   a skipped store owed release semantics. Observably equivalent to
//!   `Strong`.
//! - [`Hardware`]: native load-and-operate instruction when the target has
//!   one for the operand, otherwise a software fallback.
//!
//! Strategies are zero-sized types selected through a type parameter, so
//! the choice costs nothing at run time.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::marker::PhantomData;

use crate::atomic::element::{
    Element,
    Extremum,
};
use crate::atomic::memory_order::MemoryOrder;
use crate::atomic::native;
use crate::atomic::traits::AtomicLocation;

/// Names of the strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// See [`Strong`].
    Strong,
    /// Conditional store without ordering compensation.
    Weak,
    /// See [`Smart`].
    Smart,
    /// See [`Hardware`].
    Hardware,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::Strong => "strong",
            StrategyKind::Weak => "weak",
            StrategyKind::Smart => "smart",
            StrategyKind::Hardware => "hardware",
        };
        f.write_str(name)
    }
}

/// An algorithm for atomic fetch-max and fetch-min.
///
/// # Author
///
/// Haixing Hu
pub trait Strategy {
    /// Name of the strategy.
    const KIND: StrategyKind;

    /// Atomically replaces the value of `location` with the `op` extremum of
    /// itself and `operand`, returning the value observed immediately
    /// before the update.
    ///
    /// Lock-free: a retry only happens after another thread's store
    /// succeeded.
    fn fetch_extremum<L>(
        location: &L,
        operand: L::Value,
        order: MemoryOrder,
        op: Extremum,
    ) -> L::Value
    where
        L: AtomicLocation + ?Sized;
}

/// Unconditional read-modify-write.
///
/// Every call performs exactly one successful compare-and-exchange, also
/// when the combined value equals the stored one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Strong;

impl Strategy for Strong {
    const KIND: StrategyKind = StrategyKind::Strong;

    #[inline]
    fn fetch_extremum<L>(
        location: &L,
        operand: L::Value,
        order: MemoryOrder,
        op: Extremum,
    ) -> L::Value
    where
        L: AtomicLocation + ?Sized,
    {
        let success = order.to_std();
        let failure = order.failure_order();
        let mut current = location.atomic_load(order.load_std());
        loop {
            let desired = operand.extremum(current, op);
            match location.atomic_compare_exchange_weak(current, desired, success, failure) {
                Ok(previous) => return previous,
                Err(actual) => current = actual,
            }
        }
    }
}

/// Result of the conditional store loop.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Outcome<T> {
    /// The operand was stored over this previous value.
    Stored(T),
    /// The stored value already dominated the operand; nothing was written.
    Elided(T),
}

/// Read-and-conditional-store.
///
/// Not a conforming read-modify-write on its own: when the store is skipped
/// no release fence is issued. Only [`Smart`] is exposed.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Weak;

impl Weak {
    /// Load, then compare-and-exchange only while the operand would still
    /// change the stored value.
    #[inline]
    pub(crate) fn conditional_store<L>(
        self,
        location: &L,
        operand: L::Value,
        order: MemoryOrder,
        op: Extremum,
    ) -> Outcome<L::Value>
    where
        L: AtomicLocation + ?Sized,
    {
        let success = order.to_std();
        let failure = order.failure_order();
        let mut current = location.atomic_load(order.load_std());
        while !operand.extremum(current, op).same_as(current) {
            match location.atomic_compare_exchange_weak(current, operand, success, failure) {
                Ok(previous) => return Outcome::Stored(previous),
                Err(actual) => current = actual,
            }
        }
        Outcome::Elided(current)
    }
}

impl Strategy for Weak {
    const KIND: StrategyKind = StrategyKind::Weak;

    #[inline]
    fn fetch_extremum<L>(
        location: &L,
        operand: L::Value,
        order: MemoryOrder,
        op: Extremum,
    ) -> L::Value
    where
        L: AtomicLocation + ?Sized,
    {
        match Weak.conditional_store(location, operand, order, op) {
            Outcome::Stored(previous) | Outcome::Elided(previous) => previous,
        }
    }
}

/// Conditional store with ordering compensation.
///
/// Skips the store when the operand cannot change the stored value. If the
/// requested ordering promised release semantics (`Release`, `AcqRel` or
/// `SeqCst`), a skipped store is replaced by one no-op read-modify-write
/// with the same ordering. This is the default software strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Smart;

impl Strategy for Smart {
    const KIND: StrategyKind = StrategyKind::Smart;

    #[inline]
    fn fetch_extremum<L>(
        location: &L,
        operand: L::Value,
        order: MemoryOrder,
        op: Extremum,
    ) -> L::Value
    where
        L: AtomicLocation + ?Sized,
    {
        match Weak.conditional_store(location, operand, order, op) {
            Outcome::Stored(previous) => previous,
            Outcome::Elided(current) => {
                if order.releases() {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(%order, %op, "store elided, issuing no-op rmw");
                    location.atomic_fetch_nop(order.to_std());
                }
                current
            }
        }
    }
}

/// Native load-and-operate instruction with software fallback `F`.
///
/// The instruction always stores, so the result is a conforming
/// read-modify-write. When the target, the element type or the location has
/// no native form, `F` runs instead.
pub struct Hardware<F = Smart>(PhantomData<F>);

impl<F> Clone for Hardware<F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Hardware<F> {}

impl<F> Default for Hardware<F> {
    #[inline]
    fn default() -> Self {
        Hardware(PhantomData)
    }
}

impl<F> fmt::Debug for Hardware<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hardware")
    }
}

impl<F: Strategy> Strategy for Hardware<F> {
    const KIND: StrategyKind = StrategyKind::Hardware;

    #[inline]
    fn fetch_extremum<L>(
        location: &L,
        operand: L::Value,
        order: MemoryOrder,
        op: Extremum,
    ) -> L::Value
    where
        L: AtomicLocation + ?Sized,
    {
        if let Some(shape) = <L::Value as Element>::NATIVE {
            if let Some(emit) = native::lookup(op, shape, order.instruction_form()) {
                if let Some(cell) = location.native_cell().filter(|cell| cell.shape() == shape) {
                    // SAFETY: the cell is a live standard atomic created by
                    // this crate, and its recorded shape is the one `emit`
                    // was registered for.
                    let previous = unsafe { emit(cell.address(), operand.to_raw()) };
                    return L::Value::from_raw(previous);
                }
            }
        }
        #[cfg(feature = "tracing")]
        {
            let fallback = F::KIND;
            tracing::trace!(%fallback, %op, "no native form");
        }
        F::fetch_extremum(location, operand, order, op)
    }
}

/// Strategy used by `fetch_max` / `fetch_min` when none is named.
///
/// `Smart` unless the `hardware-default` or `strong-default` feature is
/// enabled.
#[cfg(feature = "hardware-default")]
pub type DefaultStrategy = Hardware<Smart>;

/// Strategy used by `fetch_max` / `fetch_min` when none is named.
///
/// `Smart` unless the `hardware-default` or `strong-default` feature is
/// enabled.
#[cfg(all(feature = "strong-default", not(feature = "hardware-default")))]
pub type DefaultStrategy = Strong;

/// Strategy used by `fetch_max` / `fetch_min` when none is named.
///
/// `Smart` unless the `hardware-default` or `strong-default` feature is
/// enabled.
#[cfg(not(any(feature = "strong-default", feature = "hardware-default")))]
pub type DefaultStrategy = Smart;
