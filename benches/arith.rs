//! Technique comparison on the single-pair arithmetic contract.
//!
//! Every backend computes one result for one operand pair, so these numbers
//! measure dispatch and broadcast/extract overhead, not throughput — the
//! scalar path is expected to win. The point of the crate is the selection
//! mechanism, and the point of this bench is keeping the overhead visible.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use adaptly::{Adaptive, Scalar};

macro_rules! bench_technique {
    ($group:expr, $name:expr, $t:ty, $tech:ty) => {
        $group.bench_function($name, |bencher| {
            bencher.iter(|| {
                let a = Adaptive::<$t, $tech>::new(black_box(123_456_789 as $t));
                let b = Adaptive::<$t, $tech>::new(black_box(987_654_321 as $t));
                black_box((a + b).value());
                black_box((a - b).value());
                black_box((a * b).value());
            })
        });
    };
}

fn single_pair_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("i64_single_pair");

    bench_technique!(group, "scalar", i64, Scalar);

    #[cfg(sse)]
    bench_technique!(group, "sse4.1", i64, adaptly::Sse);

    #[cfg(avx2)]
    bench_technique!(group, "avx2", i64, adaptly::Avx2);

    #[cfg(neon)]
    bench_technique!(group, "neon", i64, adaptly::Neon);

    group.finish();

    let mut group = c.benchmark_group("u8_single_pair");

    bench_technique!(group, "scalar", u8, Scalar);

    #[cfg(sse)]
    bench_technique!(group, "sse4.1", u8, adaptly::Sse);

    #[cfg(avx2)]
    bench_technique!(group, "avx2", u8, adaptly::Avx2);

    #[cfg(neon)]
    bench_technique!(group, "neon", u8, adaptly::Neon);

    group.finish();
}

criterion_group!(benches, single_pair_arithmetic);
criterion_main!(benches);
