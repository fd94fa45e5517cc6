//! Backend equivalence: technique choice must never change the arithmetic
//! result, only the method.
//!
//! Every technique compiled into this build is swept against the scalar
//! backend with seeded random operands across all eight widths, plus the
//! wraparound edges random sampling is unlikely to hit.

use adaptly::{Adaptive, Scalar};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Compares one technique against the scalar backend for one integer type:
/// random operand pairs plus the extreme values.
macro_rules! equivalence_sweep {
    ($t:ty, $tech:ty, $rng:expr) => {{
        let mut pairs: Vec<($t, $t)> = (0..512).map(|_| ($rng.random(), $rng.random())).collect();

        // Wraparound edges.
        pairs.push((<$t>::MAX, <$t>::MAX));
        pairs.push((<$t>::MIN, <$t>::MAX));
        pairs.push((<$t>::MAX, 1));
        pairs.push((<$t>::MIN, 1));
        pairs.push((0, 0));

        for (a, b) in pairs {
            let scalar_a = Adaptive::<$t, Scalar>::new(a);
            let scalar_b = Adaptive::<$t, Scalar>::new(b);
            let tech_a = Adaptive::<$t, $tech>::new(a);
            let tech_b = Adaptive::<$t, $tech>::new(b);

            assert_eq!(
                (tech_a + tech_b).value(),
                (scalar_a + scalar_b).value(),
                "add({a}, {b}) diverged for {}",
                stringify!($tech),
            );
            assert_eq!(
                (tech_a - tech_b).value(),
                (scalar_a - scalar_b).value(),
                "sub({a}, {b}) diverged for {}",
                stringify!($tech),
            );
            assert_eq!(
                (tech_a * tech_b).value(),
                (scalar_a * scalar_b).value(),
                "mul({a}, {b}) diverged for {}",
                stringify!($tech),
            );

            // Division shares one implementation across all backends; skip
            // the operand pairs where the native operator panics.
            if let Some(expected) = a.checked_div(b) {
                assert_eq!(
                    (tech_a / tech_b).value(),
                    expected,
                    "div({a}, {b}) diverged for {}",
                    stringify!($tech),
                );
            }
        }
    }};
}

macro_rules! sweep_all_widths {
    ($tech:ty, $seed:expr) => {{
        let mut rng = StdRng::seed_from_u64($seed);

        equivalence_sweep!(i8, $tech, rng);
        equivalence_sweep!(i16, $tech, rng);
        equivalence_sweep!(i32, $tech, rng);
        equivalence_sweep!(i64, $tech, rng);
        equivalence_sweep!(u8, $tech, rng);
        equivalence_sweep!(u16, $tech, rng);
        equivalence_sweep!(u32, $tech, rng);
        equivalence_sweep!(u64, $tech, rng);
    }};
}

#[test]
fn auto_matches_scalar_for_every_width() {
    sweep_all_widths!(adaptly::Auto, 0xADA0);
}

#[cfg(sse)]
#[test]
fn sse_matches_scalar_for_every_width() {
    sweep_all_widths!(adaptly::Sse, 0xADA1);
}

#[cfg(avx2)]
#[test]
fn avx2_matches_scalar_for_every_width() {
    sweep_all_widths!(adaptly::Avx2, 0xADA2);
}

#[cfg(avx512)]
#[test]
fn avx512_matches_scalar_for_every_width() {
    sweep_all_widths!(adaptly::Avx512, 0xADA3);
}

#[cfg(neon)]
#[test]
fn neon_matches_scalar_for_every_width() {
    sweep_all_widths!(adaptly::Neon, 0xADA4);
}

#[cfg(feature = "gpu")]
#[test]
fn gpu_placeholders_match_scalar_for_every_width() {
    sweep_all_widths!(adaptly::OpenCl, 0xADA5);
    sweep_all_widths!(adaptly::Vulkan, 0xADA6);
}

#[test]
fn forty_two_plus_ten_is_fifty_two_under_scalar() {
    let sum = Adaptive::<i32, Scalar>::new(42) + Adaptive::<i32, Scalar>::new(10);
    assert_eq!(sum, Adaptive::<i32, Scalar>::new(52));
}

#[cfg(sse)]
#[test]
fn forty_two_plus_ten_is_fifty_two_under_sse() {
    use adaptly::Sse;

    let sum = Adaptive::<i32, Sse>::new(42) + Adaptive::<i32, Sse>::new(10);
    assert_eq!(sum.value(), 52);
}

#[cfg(neon)]
#[test]
fn forty_two_plus_ten_is_fifty_two_under_neon() {
    use adaptly::Neon;

    let sum = Adaptive::<i32, Neon>::new(42) + Adaptive::<i32, Neon>::new(10);
    assert_eq!(sum.value(), 52);
}

#[test]
fn byte_addition_wraps_modulo_256_under_every_backend() {
    macro_rules! check {
        ($tech:ty) => {
            let sum = Adaptive::<u8, $tech>::new(250) + Adaptive::<u8, $tech>::new(10);
            assert_eq!(sum.value(), 4, "wraparound diverged for {}", stringify!($tech));
        };
    }

    check!(adaptly::Scalar);
    check!(adaptly::Auto);

    #[cfg(sse)]
    check!(adaptly::Sse);

    #[cfg(avx2)]
    check!(adaptly::Avx2);

    #[cfg(avx512)]
    check!(adaptly::Avx512);

    #[cfg(neon)]
    check!(adaptly::Neon);
}

#[test]
fn division_truncates_under_every_backend() {
    macro_rules! check {
        ($tech:ty) => {
            let quotient = Adaptive::<i32, $tech>::new(7) / Adaptive::<i32, $tech>::new(2);
            assert_eq!(quotient.value(), 3, "division diverged for {}", stringify!($tech));
        };
    }

    check!(adaptly::Scalar);
    check!(adaptly::Auto);

    #[cfg(sse)]
    check!(adaptly::Sse);

    #[cfg(avx2)]
    check!(adaptly::Avx2);

    #[cfg(avx512)]
    check!(adaptly::Avx512);

    #[cfg(neon)]
    check!(adaptly::Neon);
}
