//! Exhaustive closest pair for small point sets.

use crate::geometry::{Pair, Point};
use crate::types::{prefer, Candidate};

/// Closest pair by scanning all `(i, j)`, `i < j`.
///
/// Returns `None` for fewer than 2 points or when every distance is NaN.
/// Ties keep the first pair in scan order (smallest `i`, then smallest `j`).
pub fn brute_force(points: &[Point]) -> Option<Pair> {
    scan(points, &mut 0).map(|c| c.pair)
}

/// Scan with a comparison counter; shared by the engine's leaves.
pub(crate) fn scan(points: &[Point], comparisons: &mut usize) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            *comparisons += 1;
            best = prefer(best, Candidate::new(points[i], points[j]));
        }
    }
    best
}
