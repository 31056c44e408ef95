//! Instance fixtures.
//!
//! Fixtures panic on construction failure; they are only meant for tests.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tourforge_core::EuclideanInstance;

/// Corners of the unit square in perimeter order:
/// (0,0), (0,1), (1,1), (1,0). The optimal tour has length 4.
pub fn unit_square() -> EuclideanInstance {
    EuclideanInstance::from_coordinates(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
        .expect("unit square is a valid instance")
}

/// `n` cities on the x axis at `0, 1, .., n - 1`. The optimal tour has
/// length `2 * (n - 1)`.
pub fn line(n: usize) -> EuclideanInstance {
    let coordinates: Vec<(f64, f64)> = (0..n).map(|i| (i as f64, 0.0)).collect();
    EuclideanInstance::from_coordinates(&coordinates).expect("line needs at least one city")
}

/// `n` cities evenly spaced on the unit circle, numbered in angular order,
/// so the identity tour is the optimal one.
pub fn circle(n: usize) -> EuclideanInstance {
    let coordinates: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            (angle.cos(), angle.sin())
        })
        .collect();
    EuclideanInstance::from_coordinates(&coordinates).expect("circle needs at least one city")
}

/// `n` cities uniformly drawn in the 100 x 100 square, reproducible from `seed`.
pub fn random_euclidean(n: usize, seed: u64) -> EuclideanInstance {
    let mut rng = StdRng::seed_from_u64(seed);
    let coordinates: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();
    EuclideanInstance::from_coordinates(&coordinates)
        .expect("random instance needs at least one city")
}
