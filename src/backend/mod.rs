//! Arithmetic backends, one per technique.
//!
//! A backend is a stateless, capability-less unit implementing the same
//! four-operation contract for every supported integer width. Vector backends
//! broadcast both scalar operands into a full register of the type's width
//! class, perform a single lane-wise operation, and extract lane zero, so the
//! net result is indistinguishable from scalar arithmetic on one pair of
//! operands. Whatever a technique cannot special-case for a width falls back
//! to plain scalar arithmetic for that call.
//!
//! Vector modules are compiled only when the matching capability flag was
//! detected at build time.

use std::fmt;

use num::traits::{PrimInt, WrappingAdd, WrappingMul, WrappingSub};

pub mod scalar;

#[cfg(sse)]
pub mod sse;

#[cfg(avx2)]
pub mod avx2;

#[cfg(neon)]
pub mod neon;

mod sealed {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Fixed-width integers the backends operate on.
///
/// Sealed: the width-dispatch tables in the vector backends are written per
/// type, so the set is closed over the eight primitive integer widths.
pub trait Int:
    PrimInt
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + Default
    + fmt::Debug
    + fmt::Display
    + sealed::Sealed
{
}

impl Int for i8 {}
impl Int for i16 {}
impl Int for i32 {}
impl Int for i64 {}
impl Int for u8 {}
impl Int for u16 {}
impl Int for u32 {}
impl Int for u64 {}

/// The four-operation arithmetic contract every backend satisfies.
///
/// All operations are pure functions of their two operands: no state, no
/// allocation, no partial failure. `add`, `sub` and `mul` produce exactly the
/// native wraparound result for the width; the backend only changes how the
/// result is computed, never what it is.
///
/// `div` always delegates to the native scalar division operator — no
/// technique vectorizes division. Division by zero (and `MIN / -1` for signed
/// types) therefore panics exactly as the native operator does; the hazard is
/// propagated, not masked.
pub trait TechniqueBackend<T: Int> {
    /// Wrapping addition.
    fn add(a: T, b: T) -> T;

    /// Wrapping subtraction.
    fn sub(a: T, b: T) -> T;

    /// Wrapping multiplication.
    fn mul(a: T, b: T) -> T;

    /// Native truncating division.
    ///
    /// # Panics
    ///
    /// Panics if `b` is zero, or on `MIN / -1` for signed types, exactly as
    /// the native `/` operator does.
    fn div(a: T, b: T) -> T;
}
