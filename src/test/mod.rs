use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ColorPoint;

/// `n` distinct opaque colors drawn uniformly from the RGB cube.
pub(crate) fn random_points(n: usize, seed: u64) -> Vec<ColorPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::with_capacity(n);
    let mut points = Vec::with_capacity(n);
    while points.len() < n {
        let point = ColorPoint::opaque(rng.gen(), rng.gen(), rng.gen());
        if seen.insert(point) {
            points.push(point);
        }
    }
    points
}

/// Opaque query colors, duplicates allowed.
pub(crate) fn random_queries(n: usize, seed: u64) -> Vec<ColorPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| ColorPoint::opaque(rng.gen(), rng.gen(), rng.gen()))
        .collect()
}

/// Minimum squared distance from `query` to any of `points`, by linear scan.
pub(crate) fn brute_force_dist(points: &[ColorPoint], query: ColorPoint) -> u32 {
    points
        .iter()
        .map(|p| p.sq_dist(&query))
        .min()
        .unwrap()
}
