//! Divide-and-conquer closest pair with step events.
//!
//! Purpose
//! - Sort once by x and once by y, split at the x-median, solve both halves,
//!   then merge across the divider with the bounded strip scan (`strip`).
//! - Report every milestone to a `VisualizationPort` so a front-end can animate
//!   the run; the port may pace (`Step::Pause`) or cancel (`Step::Stop`).
//!
//! Determinism
//! - Stable sorts on `f64::total_cmp`; strict `<` at every comparison. The left
//!   half wins ties against the right half, the merged incumbent wins ties
//!   against strip pairs, and leaves keep the first pair in x-order scan.
//!
//! Layout
//! - `presort.rs`: x-ranks and the two sorted views.
//! - `runner.rs`: per-frame state machine.

mod presort;
mod runner;

use crate::error::ClosestPairError;
use crate::geometry::Point;
use crate::port::{NoopPort, VisualizationPort};
use crate::types::{EngineCfg, Solution};

use presort::presort;
use runner::Runner;

/// Closest pair with default configuration and no events.
pub fn closest_pair(points: &[Point]) -> Result<Solution, ClosestPairError> {
    closest_pair_with(points, EngineCfg::default(), &mut NoopPort)
}

/// Closest pair, emitting step events into `port`.
///
/// Errors
/// - `InsufficientInput` for fewer than 2 points.
/// - `NoComparablePair` if every distance is NaN.
/// - `Cancelled` if the port returned `Step::Stop`.
pub fn closest_pair_with<P: VisualizationPort + ?Sized>(
    points: &[Point],
    cfg: EngineCfg,
    port: &mut P,
) -> Result<Solution, ClosestPairError> {
    if points.len() < 2 {
        return Err(ClosestPairError::InsufficientInput { len: points.len() });
    }
    let (points_x, points_y) = presort(points);
    let mut runner = Runner::new(port, cfg);
    let best = runner
        .recur(&points_x, &points_y, None, None, 0)?
        .ok_or(ClosestPairError::NoComparablePair)?;
    Ok(Solution {
        pair: best.pair,
        distance: best.dist,
        stats: runner.stats,
    })
}

#[cfg(test)]
mod tests;
