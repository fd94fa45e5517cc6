//! Adaptive integer arithmetic with compile-time technique selection.
//!
//! An [`Adaptive`] value wraps one fixed-width integer and computes `+ - * /`
//! through a *technique*: the plain scalar path or a SIMD register class
//! (SSE4.1, AVX2, NEON) detected at build time. The technique is either named
//! explicitly as a type parameter or resolved automatically from the integer
//! width; either way the backend is chosen entirely at compile time and
//! monomorphized into the call site — there is no dispatch at run time.
//!
//! Every backend computes the same mathematical result as native wraparound
//! scalar arithmetic. A vector backend broadcasts the two scalar operands
//! into a wide register, performs one lane-wise operation, and extracts a
//! single lane: this is a selection mechanism, not a data-parallel array
//! library. Requesting a technique the build does not carry, or a width a
//! technique cannot serve, silently degrades to the scalar path — resolution
//! is total and never fails to compile.
//!
//! ```
//! use adaptly::{AdaptI32, Adaptive, Scalar};
//!
//! // Default technique, resolved from the width.
//! let n = AdaptI32::new(42) + AdaptI32::new(10);
//! assert_eq!(n.value(), 52);
//!
//! // Forcing a technique changes how the result is computed, never what it is.
//! let m = Adaptive::<i32, Scalar>::new(42) + Adaptive::<i32, Scalar>::new(10);
//! assert_eq!(m.value(), n.value());
//! ```

pub mod adaptive;
pub mod backend;
pub mod select;
pub mod technique;

pub use adaptive::{
    AdaptI16, AdaptI32, AdaptI64, AdaptI8, AdaptU16, AdaptU32, AdaptU64, AdaptU8, Adaptive,
};
pub use backend::{Int, TechniqueBackend};
pub use select::{Auto, Scalar, Select};
pub use technique::{ParseTechniqueError, Technique};

#[cfg(sse)]
pub use select::Sse;

#[cfg(avx2)]
pub use select::Avx2;

#[cfg(avx512)]
pub use select::Avx512;

#[cfg(neon)]
pub use select::Neon;

#[cfg(feature = "gpu")]
pub use select::{OpenCl, Vulkan};
