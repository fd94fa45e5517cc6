//! Wrapper value semantics: construction, accessors, assignment operators,
//! comparisons, and the containment of the one inherited failure mode.

use std::panic;

use adaptly::{AdaptI32, AdaptU64, AdaptU8, Adaptive, Scalar};

macro_rules! round_trip {
    ($($t:ty),+ $(,)?) => {
        $(
            for value in [<$t>::MIN, <$t>::MIN + 1, 0, 1, <$t>::MAX - 1, <$t>::MAX] {
                assert_eq!(Adaptive::<$t>::new(value).value(), value);
                assert_eq!(Adaptive::<$t>::from(value).value(), value);
            }
        )+
    };
}

#[test]
fn construction_round_trips_the_raw_value() {
    round_trip!(i8, i16, i32, i64, u8, u16, u32, u64);
}

#[test]
fn default_is_zero() {
    assert_eq!(AdaptI32::default().value(), 0);
    assert_eq!(AdaptU64::default().value(), 0);
    assert_eq!(Adaptive::<i8, Scalar>::default().value(), 0);
}

#[test]
fn set_replaces_the_stored_value() {
    let mut n = AdaptI32::new(1);
    n.set(99);
    assert_eq!(n.value(), 99);
}

#[test]
fn copies_and_moves_preserve_the_value() {
    let a = AdaptI32::new(1234);
    let b = a;

    // The destination observes the pre-move value, and the source stays
    // readable.
    assert_eq!(b.value(), 1234);
    assert_eq!(a.value(), 1234);
    assert_eq!(a, b);

    let c = a.clone();
    assert_eq!(c, a);
}

#[test]
fn compound_assignment_mutates_in_place() {
    let mut n = AdaptI32::new(42);

    n += AdaptI32::new(10);
    assert_eq!(n.value(), 52);

    n -= AdaptI32::new(2);
    assert_eq!(n.value(), 50);

    n *= AdaptI32::new(3);
    assert_eq!(n.value(), 150);

    n /= AdaptI32::new(4);
    assert_eq!(n.value(), 37);
}

#[test]
fn compound_assignment_wraps_like_the_backend() {
    let mut n = AdaptU8::new(250);
    n += AdaptU8::new(10);
    assert_eq!(n.value(), 4);
}

#[test]
fn increment_and_decrement_step_by_one() {
    let mut n = AdaptU8::new(0);
    assert_eq!(n.incr().value(), 1);
    assert_eq!(n.incr().value(), 2);
    assert_eq!(n.decr().value(), 1);
    assert_eq!(n.value(), 1);
}

#[test]
fn comparisons_are_plain_value_comparisons() {
    let small = AdaptI32::new(-5);
    let large = AdaptI32::new(5);

    assert!(small == small);
    assert!(!(small != small));
    assert!(small != large);
    assert!(small < large);
    assert!(large > small);
    assert!(small <= small);
    assert!(large >= small);
}

#[test]
fn ordering_sorts_like_the_raw_integers() {
    let mut values = vec![
        AdaptI32::new(3),
        AdaptI32::new(-7),
        AdaptI32::new(0),
        AdaptI32::new(42),
    ];
    values.sort();

    let raw: Vec<i32> = values.into_iter().map(|n| n.value()).collect();
    assert_eq!(raw, vec![-7, 0, 3, 42]);
}

/// Division by zero keeps the native operator's panic; nothing is asserted
/// about a result. What matters is containment: values that were not part of
/// the division are untouched afterwards.
#[test]
fn division_by_zero_does_not_corrupt_unrelated_values() {
    let bystander = AdaptI32::new(7);
    let other = AdaptI32::new(52);

    let outcome = panic::catch_unwind(|| AdaptI32::new(7) / AdaptI32::new(0));
    assert!(outcome.is_err());

    assert_eq!(bystander.value(), 7);
    assert_eq!(other.value(), 52);
    assert_eq!(bystander + other, AdaptI32::new(59));
}

#[test]
fn division_by_zero_panics_for_explicit_techniques_too() {
    let outcome =
        panic::catch_unwind(|| Adaptive::<u16, Scalar>::new(1) / Adaptive::<u16, Scalar>::new(0));
    assert!(outcome.is_err());

    #[cfg(sse)]
    {
        let outcome = panic::catch_unwind(|| {
            Adaptive::<u16, adaptly::Sse>::new(1) / Adaptive::<u16, adaptly::Sse>::new(0)
        });
        assert!(outcome.is_err());
    }
}
