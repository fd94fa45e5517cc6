//! AVX2 backend: 256-bit x86 integer lanes.
//!
//! Same shape as the SSE backend, one register class up: broadcast both
//! operands into `__m256i`, one packed operation, extract lane zero. Byte
//! multiply widens into 16-bit lanes (AVX2 has no packed byte multiply
//! either), 8-byte multiply is scalar (packed 64-bit multiply needs
//! AVX-512DQ), and division is always native scalar.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::TechniqueBackend;

/// Backend computing arithmetic through 256-bit AVX2 registers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Avx2Backend;

macro_rules! avx2_arith {
    // No packed byte multiply on AVX2: widen into 16-bit lanes and truncate.
    ($t:ty as $lane:ty: $set1:ident, $add:ident, $sub:ident, widen_mul, $get:ident) => {
        impl TechniqueBackend<$t> for Avx2Backend {
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
                    let va = _mm256_set1_epi16(a as i16);
                    let vb = _mm256_set1_epi16(b as i16);
                    _mm256_extract_epi16::<0>(_mm256_mullo_epi16(va, vb)) as $t
                }
            }

            #[inline(always)]
            fn div(a: $t, b: $t) -> $t {
                a / b
            }
        }
    };
    // Packed 64-bit multiply needs AVX-512DQ: scalar multiply.
    ($t:ty as $lane:ty: $set1:ident, $add:ident, $sub:ident, scalar_mul, $get:ident) => {
        impl TechniqueBackend<$t> for Avx2Backend {
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
        impl TechniqueBackend<$t> for Avx2Backend {
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

avx2_arith!(i8 as i8: _mm256_set1_epi8, _mm256_add_epi8, _mm256_sub_epi8, widen_mul, _mm256_extract_epi8);
avx2_arith!(u8 as i8: _mm256_set1_epi8, _mm256_add_epi8, _mm256_sub_epi8, widen_mul, _mm256_extract_epi8);

avx2_arith!(i16 as i16: _mm256_set1_epi16, _mm256_add_epi16, _mm256_sub_epi16, _mm256_mullo_epi16, _mm256_extract_epi16);
avx2_arith!(u16 as i16: _mm256_set1_epi16, _mm256_add_epi16, _mm256_sub_epi16, _mm256_mullo_epi16, _mm256_extract_epi16);

avx2_arith!(i32 as i32: _mm256_set1_epi32, _mm256_add_epi32, _mm256_sub_epi32, _mm256_mullo_epi32, _mm256_extract_epi32);
avx2_arith!(u32 as i32: _mm256_set1_epi32, _mm256_add_epi32, _mm256_sub_epi32, _mm256_mullo_epi32, _mm256_extract_epi32);

avx2_arith!(i64 as i64: _mm256_set1_epi64x, _mm256_add_epi64, _mm256_sub_epi64, scalar_mul, _mm256_extract_epi64);
avx2_arith!(u64 as i64: _mm256_set1_epi64x, _mm256_add_epi64, _mm256_sub_epi64, scalar_mul, _mm256_extract_epi64);
