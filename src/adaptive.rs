//! The adaptive wrapper value type.
//!
//! [`Adaptive`] binds one integer width and one technique into a single
//! arithmetic value with operator syntax. Every operation delegates to the
//! backend the technique resolved to at compile time; the wrapper itself
//! holds nothing but the raw value, and the technique marker is erased into
//! a [`PhantomData`], so an `Adaptive<T, Tech>` is exactly one `T` wide.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use num::traits::{One, Zero};

use crate::backend::{Int, TechniqueBackend};
use crate::select::{Auto, Select};
use crate::technique::Technique;

/// An integer whose arithmetic runs on a compile-time selected backend.
///
/// The default technique is [`Auto`], which picks a technique from the
/// integer width; any technique marker compiled into this build can be named
/// explicitly instead. Two wrappers of the same `(T, Tech)` instantiation
/// compare like the underlying integers; wrappers of different
/// instantiations are distinct types and do not compare.
///
/// No operation panics except division, which keeps the native operator's
/// behavior on a zero divisor.
///
/// ```
/// use adaptly::AdaptI32;
///
/// let mut n = AdaptI32::new(42);
/// n += AdaptI32::new(10);
/// assert_eq!((n * AdaptI32::new(2)).value(), 104);
/// ```
pub struct Adaptive<T: Int, Tech: Select<T> = Auto> {
    value: T,
    technique: PhantomData<Tech>,
}

impl<T: Int, Tech: Select<T>> Adaptive<T, Tech> {
    /// Wraps a raw value.
    #[inline(always)]
    pub fn new(value: T) -> Self {
        Self {
            value,
            technique: PhantomData,
        }
    }

    /// The raw stored value.
    #[inline(always)]
    pub fn value(self) -> T {
        self.value
    }

    /// Replaces the stored value.
    #[inline(always)]
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// The technique this instantiation computes with.
    ///
    /// For [`Auto`] this reports the technique the width policy resolved to,
    /// not the sentinel itself.
    pub fn technique(&self) -> Technique {
        Tech::TECHNIQUE
    }

    /// Adds one through the backend, in place, and returns the new value.
    #[inline(always)]
    pub fn incr(&mut self) -> Self {
        self.value = <Tech::Backend as TechniqueBackend<T>>::add(self.value, T::one());
        *self
    }

    /// Subtracts one through the backend, in place, and returns the new
    /// value.
    #[inline(always)]
    pub fn decr(&mut self) -> Self {
        self.value = <Tech::Backend as TechniqueBackend<T>>::sub(self.value, T::one());
        *self
    }
}

impl<T: Int, Tech: Select<T>> Clone for Adaptive<T, Tech> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Int, Tech: Select<T>> Copy for Adaptive<T, Tech> {}

impl<T: Int, Tech: Select<T>> Default for Adaptive<T, Tech> {
    /// Zero, like a value-initialized integer.
    #[inline(always)]
    fn default() -> Self {
        Self::new(T::zero())
    }
}

impl<T: Int, Tech: Select<T>> From<T> for Adaptive<T, Tech> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Int, Tech: Select<T>> Add for Adaptive<T, Tech> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::new(<Tech::Backend as TechniqueBackend<T>>::add(
            self.value, rhs.value,
        ))
    }
}

impl<T: Int, Tech: Select<T>> Sub for Adaptive<T, Tech> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::new(<Tech::Backend as TechniqueBackend<T>>::sub(
            self.value, rhs.value,
        ))
    }
}

impl<T: Int, Tech: Select<T>> Mul for Adaptive<T, Tech> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::new(<Tech::Backend as TechniqueBackend<T>>::mul(
            self.value, rhs.value,
        ))
    }
}

impl<T: Int, Tech: Select<T>> Div for Adaptive<T, Tech> {
    type Output = Self;

    /// Native truncating division.
    ///
    /// # Panics
    ///
    /// Panics on a zero divisor, exactly as the native `/` operator does.
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self::new(<Tech::Backend as TechniqueBackend<T>>::div(
            self.value, rhs.value,
        ))
    }
}

impl<T: Int, Tech: Select<T>> AddAssign for Adaptive<T, Tech> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.value = <Tech::Backend as TechniqueBackend<T>>::add(self.value, rhs.value);
    }
}

impl<T: Int, Tech: Select<T>> SubAssign for Adaptive<T, Tech> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.value = <Tech::Backend as TechniqueBackend<T>>::sub(self.value, rhs.value);
    }
}

impl<T: Int, Tech: Select<T>> MulAssign for Adaptive<T, Tech> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        self.value = <Tech::Backend as TechniqueBackend<T>>::mul(self.value, rhs.value);
    }
}

impl<T: Int, Tech: Select<T>> DivAssign for Adaptive<T, Tech> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        self.value = <Tech::Backend as TechniqueBackend<T>>::div(self.value, rhs.value);
    }
}

impl<T: Int, Tech: Select<T>> PartialEq for Adaptive<T, Tech> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Int, Tech: Select<T>> Eq for Adaptive<T, Tech> {}

impl<T: Int, Tech: Select<T>> PartialOrd for Adaptive<T, Tech> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Int, Tech: Select<T>> Ord for Adaptive<T, Tech> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Int, Tech: Select<T>> fmt::Debug for Adaptive<T, Tech> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adaptive")
            .field("value", &self.value)
            .field("technique", &Tech::TECHNIQUE.name())
            .finish()
    }
}

impl<T: Int, Tech: Select<T>> fmt::Display for Adaptive<T, Tech> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// 8-bit signed adaptive integer, default technique.
pub type AdaptI8 = Adaptive<i8>;
/// 16-bit signed adaptive integer, default technique.
pub type AdaptI16 = Adaptive<i16>;
/// 32-bit signed adaptive integer, default technique.
pub type AdaptI32 = Adaptive<i32>;
/// 64-bit signed adaptive integer, default technique.
pub type AdaptI64 = Adaptive<i64>;

/// 8-bit unsigned adaptive integer, default technique.
pub type AdaptU8 = Adaptive<u8>;
/// 16-bit unsigned adaptive integer, default technique.
pub type AdaptU16 = Adaptive<u16>;
/// 32-bit unsigned adaptive integer, default technique.
pub type AdaptU32 = Adaptive<u32>;
/// 64-bit unsigned adaptive integer, default technique.
pub type AdaptU64 = Adaptive<u64>;
