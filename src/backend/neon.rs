//! NEON backend: 128-bit AArch64 integer lanes.
//!
//! Broadcast with `vdupq_n_*`, one lane-wise operation, extract lane zero
//! with `vgetq_lane_*`. Unlike x86, NEON has a native byte-wide multiply
//! (`vmulq_s8`/`vmulq_u8`), so no widening detour is needed; there is no
//! 64-bit lane multiply at all, so 8-byte multiply is scalar. Division is
//! always native scalar.

use std::arch::aarch64::*;

use super::TechniqueBackend;

/// Backend computing arithmetic through 128-bit NEON registers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeonBackend;

macro_rules! neon_arith {
    // No 64-bit lane multiply on NEON: scalar multiply.
    ($t:ty: $dup:ident, $add:ident, $sub:ident, scalar_mul, $get:ident) => {
        impl TechniqueBackend<$t> for NeonBackend {
            #[inline(always)]
            fn add(a: $t, b: $t) -> $t {
                unsafe { $get::<0>($add($dup(a), $dup(b))) }
            }

            #[inline(always)]
            fn sub(a: $t, b: $t) -> $t {
                unsafe { $get::<0>($sub($dup(a), $dup(b))) }
            }

            #[inline(always)]
            fn mul(a: $t, b: $t) -> $t {
                a.wrapping_mul(b)
            }

            #[inline(always)]
            fn div(a: $t, b: $t) -> $t {
                a / b
            }
        }
    };
    // Native lane-wise multiply.
    ($t:ty: $dup:ident, $add:ident, $sub:ident, $mul:ident, $get:ident) => {
        impl TechniqueBackend<$t> for NeonBackend {
            #[inline(always)]
            fn add(a: $t, b: $t) -> $t {
                unsafe { $get::<0>($add($dup(a), $dup(b))) }
            }

            #[inline(always)]
            fn sub(a: $t, b: $t) -> $t {
                unsafe { $get::<0>($sub($dup(a), $dup(b))) }
            }

            #[inline(always)]
            fn mul(a: $t, b: $t) -> $t {
                unsafe { $get::<0>($mul($dup(a), $dup(b))) }
            }

            #[inline(always)]
            fn div(a: $t, b: $t) -> $t {
                a / b
            }
        }
    };
}

neon_arith!(i8: vdupq_n_s8, vaddq_s8, vsubq_s8, vmulq_s8, vgetq_lane_s8);
neon_arith!(u8: vdupq_n_u8, vaddq_u8, vsubq_u8, vmulq_u8, vgetq_lane_u8);

neon_arith!(i16: vdupq_n_s16, vaddq_s16, vsubq_s16, vmulq_s16, vgetq_lane_s16);
neon_arith!(u16: vdupq_n_u16, vaddq_u16, vsubq_u16, vmulq_u16, vgetq_lane_u16);

neon_arith!(i32: vdupq_n_s32, vaddq_s32, vsubq_s32, vmulq_s32, vgetq_lane_s32);
neon_arith!(u32: vdupq_n_u32, vaddq_u32, vsubq_u32, vmulq_u32, vgetq_lane_u32);

neon_arith!(i64: vdupq_n_s64, vaddq_s64, vsubq_s64, scalar_mul, vgetq_lane_s64);
neon_arith!(u64: vdupq_n_u64, vaddq_u64, vsubq_u64, scalar_mul, vgetq_lane_u64);
