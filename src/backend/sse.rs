//! SSE4.1 backend: 128-bit x86 integer lanes.
//!
//! Both operands are broadcast into `__m128i` registers with the lane width
//! matching the integer type, one packed operation runs, and lane zero is
//! extracted. Two widths have no packed path and fall back to scalar
//! arithmetic for that call:
//!
//! - byte-wide multiply: no `_mm_mullo_epi8` instruction exists, so 1-byte
//!   operands are widened into 16-bit lanes, multiplied, and truncated on
//!   extraction — a correctness requirement, not an optimization;
//! - 8-byte multiply: no packed 64-bit multiply exists below AVX-512DQ.
//!
//! Division is always native scalar; no technique vectorizes it.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::TechniqueBackend;

/// Backend computing arithmetic through 128-bit SSE registers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SseBackend;

macro_rules! sse_arith {
    // No packed byte multiply on SSE: widen into 16-bit lanes and truncate.
    ($t:ty as $lane:ty: $set1:ident, $add:ident, $sub:ident, widen_mul, $get:ident) => {
        impl TechniqueBackend<$t> for SseBackend {
            #[inline(always)]
            fn add(a: $t, b: $t) -> $t {
                unsafe { $get::<0>($add($set1(a as $lane), $set1(b as $lane))) as $t }
            }

            #[inline(always)]
            fn sub(a: $t, b: $t) -> $t {
                unsafe { $get::<0>($sub($set1(a as $lane), $set1(b as $lane))) as $t }
            }

            #[inline(always)]
            fn mul(a: $t, b: $t) -> $t {
                unsafe {
                    let va = _mm_set1_epi16(a as i16);
                    let vb = _mm_set1_epi16(b as i16);
                    _mm_extract_epi16::<0>(_mm_mullo_epi16(va, vb)) as $t
                }
            }

            #[inline(always)]
            fn div(a: $t, b: $t) -> $t {
                a / b
            }
        }
    };
    // No packed 64-bit multiply below AVX-512DQ: scalar multiply.
    ($t:ty as $lane:ty: $set1:ident, $add:ident, $sub:ident, scalar_mul, $get:ident) => {
        impl TechniqueBackend<$t> for SseBackend {
            #[inline(always)]
            fn add(a: $t, b: $t) -> $t {
                unsafe { $get::<0>($add($set1(a as $lane), $set1(b as $lane))) as $t }
            }

            #[inline(always)]
            fn sub(a: $t, b: $t) -> $t {
                unsafe { $get::<0>($sub($set1(a as $lane), $set1(b as $lane))) as $t }
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
    // Same-width packed multiply.
    ($t:ty as $lane:ty: $set1:ident, $add:ident, $sub:ident, $mul:ident, $get:ident) => {
        impl TechniqueBackend<$t> for SseBackend {
            #[inline(always)]
            fn add(a: $t, b: $t) -> $t {
                unsafe { $get::<0>($add($set1(a as $lane), $set1(b as $lane))) as $t }
            }

            #[inline(always)]
            fn sub(a: $t, b: $t) -> $t {
                unsafe { $get::<0>($sub($set1(a as $lane), $set1(b as $lane))) as $t }
            }

            #[inline(always)]
            fn mul(a: $t, b: $t) -> $t {
                unsafe { $get::<0>($mul($set1(a as $lane), $set1(b as $lane))) as $t }
            }

            #[inline(always)]
            fn div(a: $t, b: $t) -> $t {
                a / b
            }
        }
    };
}

sse_arith!(i8 as i8: _mm_set1_epi8, _mm_add_epi8, _mm_sub_epi8, widen_mul, _mm_extract_epi8);
sse_arith!(u8 as i8: _mm_set1_epi8, _mm_add_epi8, _mm_sub_epi8, widen_mul, _mm_extract_epi8);

sse_arith!(i16 as i16: _mm_set1_epi16, _mm_add_epi16, _mm_sub_epi16, _mm_mullo_epi16, _mm_extract_epi16);
sse_arith!(u16 as i16: _mm_set1_epi16, _mm_add_epi16, _mm_sub_epi16, _mm_mullo_epi16, _mm_extract_epi16);

sse_arith!(i32 as i32: _mm_set1_epi32, _mm_add_epi32, _mm_sub_epi32, _mm_mullo_epi32, _mm_extract_epi32);
sse_arith!(u32 as i32: _mm_set1_epi32, _mm_add_epi32, _mm_sub_epi32, _mm_mullo_epi32, _mm_extract_epi32);

sse_arith!(i64 as i64: _mm_set1_epi64x, _mm_add_epi64, _mm_sub_epi64, scalar_mul, _mm_extract_epi64);
sse_arith!(u64 as i64: _mm_set1_epi64x, _mm_add_epi64, _mm_sub_epi64, scalar_mul, _mm_extract_epi64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_native_wraparound() {
        assert_eq!(SseBackend::add(250u8, 10), 4);
        assert_eq!(SseBackend::add(i32::MAX, 1), i32::MIN);
        assert_eq!(SseBackend::sub(0u64, 1), u64::MAX);
    }

    #[test]
    fn byte_multiply_truncates_like_native() {
        assert_eq!(SseBackend::mul(100u8, 3), 44);
        assert_eq!(SseBackend::mul(-100i8, 3), (-100i8).wrapping_mul(3));
    }

    #[test]
    fn division_is_native() {
        assert_eq!(SseBackend::div(7i32, 2), 3);
        assert_eq!(SseBackend::div(u16::MAX, 2), 32767);
    }
}
