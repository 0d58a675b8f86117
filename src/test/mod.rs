//! Shared fixtures and cross-implementation tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


pub(crate) fn scattered_x() -> Vec<f64> {
    vec![
        2.76964, 1.72057, 4.50333, 1.41612, 3.34827, 1.71495, 3.10408, 4.34419, 2.66255, 0.826588,
    ]
}

pub(crate) fn scattered_y() -> Vec<f64> {
    vec![
        0.515162, 3.61385, 3.80529, 2.38902, 3.51642, 1.54887, 0.577434, 3.86879, 1.75372, 1.12639,
    ]
}

/// `n` points drawn uniformly from `[-100, 100)^2`.
pub(crate) fn random_points(seed: u64, n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)))
        .unzip()
}

/// `n` points on a small integer grid, so many of them coincide.
pub(crate) fn clustered_points(seed: u64, n: usize) -> (Vec<i32>, Vec<i32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.gen_range(-5..5), rng.gen_range(-5..5)))
        .unzip()
}
