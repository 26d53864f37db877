//! Shared data generators for integration tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Noise-free piecewise-constant sequence from `(level, length)` pairs
pub fn step(levels: &[(f64, usize)]) -> Vec<f64> {
    levels
        .iter()
        .flat_map(|&(value, len)| std::iter::repeat(value).take(len))
        .collect()
}

/// Piecewise-normal sequence from `(mean, sd, length)` triples
pub fn normal_regimes(regimes: &[(f64, f64, usize)], seed: u64) -> Vec<f64> {
    let mut rng = rng(seed);
    let mut data = Vec::new();
    for &(mean, sd, len) in regimes {
        let normal = Normal::new(mean, sd).unwrap();
        data.extend((0..len).map(|_| normal.sample(&mut rng)));
    }
    data
}

/// Random sequence mixing continuous noise, repeated values and level shifts
pub fn mixed_sequence(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = rng(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut level: f64 = 0.0;
    (0..len)
        .map(|_| {
            if rng.gen_bool(0.05) {
                level = rng.gen_range(-10.0..10.0);
            }
            if rng.gen_bool(0.2) {
                level.round()
            } else {
                level + normal.sample(&mut rng)
            }
        })
        .collect()
}
