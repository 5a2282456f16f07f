#![allow(dead_code)]

use criterion::PlotConfiguration;
use rand::distributions::{Distribution, Uniform};
use rand::prelude::ThreadRng;
use rand::Rng;

pub const SIZES: [usize; 7] = [
    1 << 8,
    1 << 10,
    1 << 12,
    1 << 14,
    1 << 16,
    1 << 18,
    1 << 20,
];

/// The brute-force table is quadratic, so it only runs on the smallest inputs.
pub const PRECOMPUTED_SIZES: [usize; 3] = [1 << 6, 1 << 8, 1 << 10];

pub fn fill_random_vec(rng: &mut ThreadRng, len: usize) -> Vec<u64> {
    let sample = Uniform::new(0, u64::MAX);

    let mut vec = Vec::with_capacity(len);
    for _ in 0..len {
        vec.push(sample.sample(rng));
    }

    vec
}

/// Draws a random non-empty half-open range within `len` elements.
pub fn random_range(rng: &mut ThreadRng, len: usize) -> (usize, usize) {
    let low = rng.gen_range(0..len);
    let high = rng.gen_range(low + 1..=len);
    (low, high)
}

pub fn plot_config() -> PlotConfiguration {
    PlotConfiguration::default().summary_scale(criterion::AxisScale::Logarithmic)
}
