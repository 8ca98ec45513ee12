//! Result, statistics, and configuration types shared by the solvers.

use serde::{Deserialize, Serialize};

use crate::geometry::{distance, Pair, Point};

/// Engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineCfg {
    /// Frames with at most this many points are solved by brute force.
    /// Values below 3 are raised to 3 so both halves of a split keep 2+ points.
    pub leaf_size: usize,
}

impl Default for EngineCfg {
    fn default() -> Self {
        Self { leaf_size: 3 }
    }
}

impl EngineCfg {
    #[inline]
    pub(crate) fn effective_leaf_size(&self) -> usize {
        self.leaf_size.max(3)
    }
}

/// Counters collected over one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Recursion frames opened (leaves included).
    pub frames: usize,
    /// Frames solved by brute force.
    pub leaves: usize,
    /// Deepest frame; the top-level frame has depth 0.
    pub max_depth: usize,
    /// Distance evaluations inside brute-force leaves.
    pub brute_force_comparisons: usize,
    /// Distance evaluations inside the strip inner loop.
    pub strip_comparisons: usize,
    /// Sum of strip sizes over all internal frames.
    pub strip_points: usize,
}

/// Closest pair plus its distance and run statistics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub pair: Pair,
    pub distance: f64,
    pub stats: Stats,
}

/// Incumbent pair with its cached distance.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Candidate {
    pub pair: Pair,
    pub dist: f64,
}

impl Candidate {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            pair: Pair::new(a, b),
            dist: distance(&a, &b),
        }
    }

    /// Strict improvement; NaN never improves.
    #[inline]
    pub fn is_beaten_by(&self, dist: f64) -> bool {
        dist < self.dist
    }
}

/// Keep `current` unless `challenger` is strictly closer. A NaN challenger is
/// never kept, so the incumbent (if any) always has a comparable distance.
#[inline]
pub(crate) fn prefer(current: Option<Candidate>, challenger: Candidate) -> Option<Candidate> {
    match current {
        None if challenger.dist.is_nan() => None,
        None => Some(challenger),
        Some(c) if c.is_beaten_by(challenger.dist) => Some(challenger),
        Some(c) => Some(c),
    }
}
