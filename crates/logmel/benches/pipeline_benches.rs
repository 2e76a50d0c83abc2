//! Criterion benchmarks for melfix-logmel
//!
//! Measures one `process` call per frame across FFT sizes and band counts,
//! plus filterbank construction.
//! Run with: cargo bench -p melfix-logmel --bench pipeline_benches

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use melfix_logmel::{FilterNormalization, LogMel, LogMelParams, MelScale};
use melfix_math::{Complex, Q6_25};
use std::hint::black_box;

const FFT_SIZES: [usize; 4] = [256, 512, 1024, 2048];

fn test_spectrum(len: usize) -> Vec<Complex<i32>> {
    (0..len)
        .map(|k| {
            let k = k as i32;
            Complex::new(
                k.wrapping_mul(0x1357_9bdf) >> 6,
                k.wrapping_mul(-0x0246_8ace) >> 6,
            )
        })
        .collect()
}

/// Benchmark a full frame at the default 23 bands
fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");

    for &fft_size in FFT_SIZES.iter() {
        let params = LogMelParams {
            fft_size,
            ..Default::default()
        };
        let logmel = LogMel::new(params).unwrap();
        let spectrum = test_spectrum(logmel.spectrum_len());
        let mut scratch = vec![0u8; logmel.scratch_size()];
        let mut output = vec![Q6_25::ZERO; logmel.band_num()];

        group.bench_with_input(BenchmarkId::from_parameter(fft_size), &fft_size, |bencher, _| {
            bencher.iter(|| {
                logmel
                    .process(&mut scratch, &mut output, black_box(&spectrum), 24)
                    .unwrap();
                black_box(&output);
            })
        });
    }

    group.finish();
}

/// Benchmark band count scaling at 512 points
fn bench_band_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("band_count");

    for &band_num in [13usize, 23, 40].iter() {
        let params = LogMelParams {
            band_num,
            ..Default::default()
        };
        let logmel = LogMel::new(params).unwrap();
        let spectrum = test_spectrum(logmel.spectrum_len());
        let mut scratch = vec![0u8; logmel.scratch_size()];
        let mut output = vec![Q6_25::ZERO; logmel.band_num()];

        group.bench_with_input(BenchmarkId::from_parameter(band_num), &band_num, |bencher, _| {
            bencher.iter(|| {
                logmel
                    .process(&mut scratch, &mut output, black_box(&spectrum), 24)
                    .unwrap();
                black_box(&output);
            })
        });
    }

    group.finish();
}

/// Benchmark filterbank construction
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("htk_unit", |bencher| {
        bencher.iter(|| LogMel::new(black_box(LogMelParams::default())).unwrap())
    });

    group.bench_function("slaney_area", |bencher| {
        let params = LogMelParams {
            band_num: 40,
            mel_scale: MelScale::AuditoryToolbox,
            normalization: FilterNormalization::Area,
            ..Default::default()
        };
        bencher.iter(|| LogMel::new(black_box(params)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_process, bench_band_count, bench_construction);
criterion_main!(benches);
