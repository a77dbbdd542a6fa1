//! Shared helpers for the integration tests: input builders and an f64 oracle.
#![allow(dead_code)]

use approx::relative_eq;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic small-integer matrix, `rows × cols` complex.
///
/// Integer inputs keep every partial sum exactly representable, so all
/// strategies must agree bit for bit on these.
pub fn pattern_matrix(rows: usize, cols: usize, salt: usize) -> Vec<f32> {
    (0..2 * rows * cols)
        .map(|i| ((i * 7 + salt) % 11) as f32 - 5.0)
        .collect()
}

/// Seeded random matrix with entries in [-1, 1).
pub fn random_matrix(rows: usize, cols: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..2 * rows * cols)
        .map(|_| rng.random_range(-1.0f32..1.0))
        .collect()
}

/// C = A * B^T accumulated in f64, rounded to f32 once at the end.
pub fn reference_trans(a: &[f32], b: &[f32], m: usize, n: usize, o: usize) -> Vec<f32> {
    let at = |data: &[f32], r: usize, p: usize| {
        let idx = (r * n + p) * 2;
        Complex64::new(data[idx] as f64, data[idx + 1] as f64)
    };

    let mut c = vec![0.0f32; 2 * m * o];
    for i in 0..m {
        for j in 0..o {
            let sum: Complex64 = (0..n).map(|p| at(a, i, p) * at(b, j, p)).sum();
            c[(i * o + j) * 2] = sum.re as f32;
            c[(i * o + j) * 2 + 1] = sum.im as f32;
        }
    }
    c
}

/// Absolute tolerance for an f32 sum of `n` complex products of unit-sized values.
pub fn sum_tolerance(n: usize) -> f32 {
    1e-5 * (2 * n).max(1) as f32
}

pub fn assert_cmplx_close(expected: &[f32], actual: &[f32], tol: f32, name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert!(
            relative_eq!(expected[i], actual[i], epsilon = tol, max_relative = tol),
            "{}: mismatch at index {} ({} of entry {}): expected {}, got {}",
            name,
            i,
            if i % 2 == 0 { "re" } else { "im" },
            i / 2,
            expected[i],
            actual[i]
        );
    }
}
