//! iai-callgrind benchmarks for melfix-math
//!
//! Measures instruction counts for the kernels (deterministic, cachegrind-based).
//! Run with: cargo bench --bench iai_benches

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use melfix_math::block::block_exponent_complex;
use melfix_math::math::{log2_lanes, magnitude, magnitude_lanes};
use melfix_math::{Complex, DefaultFixedVector, FixedVector};
use std::hint::black_box;

// Lane kernels

#[library_benchmark]
fn bench_magnitude_lanes() -> DefaultFixedVector {
    let re = black_box(DefaultFixedVector::splat(0x1234_5678));
    let im = black_box(DefaultFixedVector::splat(-0x0765_4321));
    black_box(magnitude_lanes(re, im))
}

#[library_benchmark]
fn bench_log2_lanes() -> DefaultFixedVector {
    let x = black_box(DefaultFixedVector::splat(0x5A82_7999));
    black_box(log2_lanes(x))
}

library_benchmark_group!(
    name = lanes_group;
    benchmarks = bench_magnitude_lanes, bench_log2_lanes
);

// Slice drivers

#[library_benchmark]
fn bench_magnitude_257_bins() -> i32 {
    let input: Vec<Complex<i32>> = (0..257)
        .map(|k| Complex::new(k << 20, -(k << 19)))
        .collect();
    let mut output = vec![0i32; input.len()];
    magnitude(black_box(&input), &mut output);
    black_box(output[128])
}

#[library_benchmark]
fn bench_block_exponent_257_bins() -> u32 {
    let input: Vec<Complex<i32>> = (0..257).map(|k| Complex::new(k << 12, k)).collect();
    black_box(block_exponent_complex(black_box(&input)))
}

library_benchmark_group!(
    name = slice_group;
    benchmarks = bench_magnitude_257_bins, bench_block_exponent_257_bins
);

main!(library_benchmark_groups = lanes_group, slice_group);
