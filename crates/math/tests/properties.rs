//! Property-based tests for melfix-math
//!
//! Uses proptest to validate kernel invariants on the default backend.

use melfix_math::block::{apply_shift, block_exponent, ZERO_BLOCK_EXPONENT};
use melfix_math::math::{log2_scalar, magnitude_scalar};
use melfix_math::ops::{redundant_sign_bits, shift_sat};
use proptest::prelude::*;


#[cfg(test)]
use test_utils::*;

use proptest::test_runner::Config as ProptestConfig;

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 10_000,
        ..ProptestConfig::default()
    }
}

/// Property: magnitude is within 1e-6 relative (or 2 LSB) of the exact value
#[test]
fn test_magnitude_accuracy() {
    proptest!(proptest_config(), |((re, im) in (any_q31(), any_q31()))| {
        assert_magnitude_close(magnitude_scalar(re, im), re, im);
    });
}

/// Property: magnitude ignores component signs and order
#[test]
fn test_magnitude_symmetry() {
    proptest!(proptest_config(), |((re, im) in (q31_component(), q31_component()))| {
        let m = magnitude_scalar(re, im);
        assert_eq!(m, magnitude_scalar(-re, im));
        assert_eq!(m, magnitude_scalar(re, -im));
        assert_eq!(m, magnitude_scalar(im, re));
    });
}

/// Property: magnitude is never negative and lies between max(|re|, |im|)
/// and |re| + |im|, up to the kernel tolerance
#[test]
fn test_magnitude_bounds() {
    proptest!(proptest_config(), |((re, im) in (any_q31(), any_q31()))| {
        let m = magnitude_scalar(re, im) as f64;
        assert!(m >= 0.0);
        let (a, b) = ((re as f64).abs() / 2.0, (im as f64).abs() / 2.0);
        let slack = |v: f64| v * MAGNITUDE_RELATIVE_TOLERANCE + MAGNITUDE_ABSOLUTE_TOLERANCE;
        let upper = (a + b).min(i32::MAX as f64);
        let lower = a.max(b).min(i32::MAX as f64);
        assert!(m <= upper + slack(upper), "magnitude({}, {}) = {} above {}", re, im, m, upper);
        assert!(m >= lower - slack(lower), "magnitude({}, {}) = {} below {}", re, im, m, lower);
    });
}

/// Property: log2 stays within 32 LSB of the exact value
#[test]
fn test_log2_accuracy() {
    proptest!(proptest_config(), |(x in normalized_mantissa())| {
        let got = log2_scalar(x);
        assert_log2_close(got, x);
        assert!(got <= 0);
    });
}

/// Property: log2 is monotone non-decreasing
#[test]
fn test_log2_monotone() {
    proptest!(proptest_config(), |((a, b) in (normalized_mantissa(), normalized_mantissa()))| {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        assert!(
            log2_scalar(lo) <= log2_scalar(hi),
            "log2 not monotone between {} and {}", lo, hi
        );
    });
}

/// Property: 2^log2(x) recovers x to within 1e-7 relative
#[test]
fn test_log2_round_trip() {
    proptest!(proptest_config(), |(x in normalized_mantissa())| {
        let l = log2_scalar(x) as f64 / Q31_SCALE;
        let back = libm::exp2(l) * Q31_SCALE;
        let rel = (back - x as f64).abs() / x as f64;
        assert!(rel < 1e-7, "round trip of {} gave {} (rel {})", x, back, rel);
    });
}

/// Property: the block exponent is the largest lossless left shift
#[test]
fn test_block_exponent_is_lossless_and_tight() {
    proptest!(proptest_config(), |(block in sample_block())| {
        let nsa = block_exponent(&block);
        for &x in &block {
            let shifted = (x as i64) << nsa;
            assert!(shifted >= i32::MIN as i64 && shifted <= i32::MAX as i64);
        }
        if block.iter().all(|&x| x == 0 || x == -1) {
            assert_eq!(nsa, ZERO_BLOCK_EXPONENT);
        } else {
            let min = block.iter().map(|&x| redundant_sign_bits(x)).min().unwrap();
            assert_eq!(nsa as i32, min);
        }
    });
}

/// Property: redundant sign bits agree with a counting reference
#[test]
fn test_redundant_sign_bits_reference() {
    proptest!(proptest_config(), |(x in any_q31())| {
        assert_eq!(redundant_sign_bits(x) as u32, ref_redundant_sign_bits(x));
    });
}

/// Property: shifting left by the block exponent then back is the identity
#[test]
fn test_apply_shift_reversible_at_block_exponent() {
    proptest!(proptest_config(), |(block in sample_block())| {
        let nsa = block_exponent(&block) as i32;
        let mut up = vec![0; block.len()];
        let mut down = vec![0; block.len()];
        apply_shift(&mut up, &block, nsa);
        apply_shift(&mut down, &up, -nsa);
        assert_eq!(down, block);
        for (u, x) in up.iter().zip(&block) {
            assert_eq!(*u, shift_sat(*x, nsa));
        }
    });
}
