//! Scalar backend: native integer arithmetic, the universal fallback.
//!
//! Present in every build. This is also the reference every vector backend is
//! measured against: for any operand pair, a vector backend must return
//! exactly what this one returns.

use num::traits::{WrappingAdd, WrappingMul, WrappingSub};

use super::{Int, TechniqueBackend};

/// Backend computing every operation with native scalar instructions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarBackend;

impl<T: Int> TechniqueBackend<T> for ScalarBackend {
    #[inline(always)]
    fn add(a: T, b: T) -> T {
        a.wrapping_add(&b)
    }

    #[inline(always)]
    fn sub(a: T, b: T) -> T {
        a.wrapping_sub(&b)
    }

    #[inline(always)]
    fn mul(a: T, b: T) -> T {
        a.wrapping_mul(&b)
    }

    #[inline(always)]
    fn div(a: T, b: T) -> T {
        a / b
    }
}
