//! Compile-time resolution from a requested technique to a concrete backend.
//!
//! Each technique is a zero-sized marker type; [`Select`] is the resolution
//! mapping from `(integer type, marker)` to the backend that will serve it.
//! Resolution is total by construction: every marker that exists in a build
//! implements `Select` for every supported integer type, and anything the
//! build cannot serve with a vector unit resolves to the scalar backend.
//! There is nothing left to decide — or fail — at run time.
//!
//! Precedence, mirrored by the impls below:
//!
//! 1. [`Scalar`] always resolves to the scalar backend.
//! 2. A capability-gated marker resolves to its own backend for every width.
//! 3. Techniques with no backend of their own degrade to scalar: the GPU
//!    placeholders always, [`Avx512`] when the 256-bit backend it borrows is
//!    absent.
//! 4. [`Auto`] pins widths per type: 8-byte integers go to the 128-bit
//!    backend, everything narrower stays scalar. Exact-match pins, not a
//!    generic rule.

use crate::backend::scalar::ScalarBackend;
use crate::backend::{Int, TechniqueBackend};
use crate::technique::Technique;

#[cfg(avx2)]
use crate::backend::avx2::Avx2Backend;

#[cfg(neon)]
use crate::backend::neon::NeonBackend;

#[cfg(sse)]
use crate::backend::sse::SseBackend;

/// Compile-time mapping from a technique marker to the backend serving `T`.
///
/// Implemented by every technique marker for every supported integer type,
/// so any `(T, technique)` pair nameable through the public API resolves to
/// some backend — scalar when nothing better exists.
pub trait Select<T: Int> {
    /// The backend that computes arithmetic for this pair.
    type Backend: TechniqueBackend<T>;

    /// The identifier reported by wrappers using this marker. For [`Auto`]
    /// this is the technique the width policy picked, not the sentinel.
    const TECHNIQUE: Technique;
}

/// Marker: plain scalar arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scalar;

/// Marker: pick the technique from the integer width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Auto;

/// Marker: 128-bit SSE4.1 lanes.
#[cfg(sse)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sse;

/// Marker: 256-bit AVX2 lanes.
#[cfg(avx2)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Avx2;

/// Marker: AVX-512. Served by the 256-bit backend.
#[cfg(avx512)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Avx512;

/// Marker: 128-bit NEON lanes.
#[cfg(neon)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neon;

/// Marker: OpenCL offload placeholder. Resolves to scalar.
#[cfg(feature = "gpu")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenCl;

/// Marker: Vulkan offload placeholder. Resolves to scalar.
#[cfg(feature = "gpu")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vulkan;

impl<T: Int> Select<T> for Scalar {
    type Backend = ScalarBackend;
    const TECHNIQUE: Technique = Technique::Scalar;
}

#[cfg(feature = "gpu")]
impl<T: Int> Select<T> for OpenCl {
    type Backend = ScalarBackend;
    const TECHNIQUE: Technique = Technique::OpenCl;
}

#[cfg(feature = "gpu")]
impl<T: Int> Select<T> for Vulkan {
    type Backend = ScalarBackend;
    const TECHNIQUE: Technique = Technique::Vulkan;
}

macro_rules! select_for {
    ($tech:ty => $backend:ty, $id:expr; $($t:ty),+ $(,)?) => {
        $(
            impl Select<$t> for $tech {
                type Backend = $backend;
                const TECHNIQUE: Technique = $id;
            }
        )+
    };
}

#[cfg(sse)]
select_for!(Sse => SseBackend, Technique::Sse; i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(avx2)]
select_for!(Avx2 => Avx2Backend, Technique::Avx2; i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(neon)]
select_for!(Neon => NeonBackend, Technique::Neon; i8, i16, i32, i64, u8, u16, u32, u64);

// AVX-512 borrows the 256-bit backend rather than carrying one of its own.
#[cfg(all(avx512, avx2))]
select_for!(Avx512 => Avx2Backend, Technique::Avx512; i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(all(avx512, not(avx2)))]
impl<T: Int> Select<T> for Avx512 {
    type Backend = ScalarBackend;
    const TECHNIQUE: Technique = Technique::Avx512;
}

// The 128-bit backend serving Auto's 8-byte pins in this build.
#[cfg(sse)]
type Wide128 = SseBackend;

#[cfg(all(neon, not(sse)))]
type Wide128 = NeonBackend;

#[cfg(not(any(sse, neon)))]
type Wide128 = ScalarBackend;

// Width policy: broadcasting a narrow scalar through a vector register buys
// nothing, so anything up to 4 bytes stays scalar; 8-byte integers are pinned
// to the 128-bit register class.
select_for!(Auto => ScalarBackend, Technique::Scalar; i8, i16, i32, u8, u16, u32);
select_for!(Auto => Wide128, Technique::for_width(8); i64, u64);
