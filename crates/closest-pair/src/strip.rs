//! Strip merge: cross-divider candidates within `min_dist` of the split line.
//!
//! Model
//! - Points within `min_dist` of `mid_x`, sorted by y, are scanned pairwise. The
//!   inner loop stops as soon as the y-gap reaches `min_dist`.
//! - By the packing argument only a constant number of points fit in a
//!   `2·min_dist × min_dist` box, so the scan does O(strip size) distance
//!   evaluations per frame and O(n log n) work overall.

use crate::error::ClosestPairError;
use crate::geometry::{distance, Pair, Point, SubproblemBounds};
use crate::port::{NoopPort, VisualizationPort};
use crate::types::{prefer, Candidate, Stats};

/// Points of `points_y` with `|p.x - mid_x| < min_dist`, keeping y order.
pub fn build_strip<'a, I>(points_y: I, mid_x: f64, min_dist: f64) -> Vec<Point>
where
    I: IntoIterator<Item = &'a Point>,
{
    points_y
        .into_iter()
        .filter(|p| (p.x - mid_x).abs() < min_dist)
        .copied()
        .collect()
}

/// Strip window `[mid_x - d, mid_x + d]` reported to ports.
#[inline]
pub fn strip_bounds(mid_x: f64, min_dist: f64) -> SubproblemBounds {
    SubproblemBounds::new(mid_x - min_dist, mid_x + min_dist)
}

/// Best of `incumbent` and every strip pair closer than it.
///
/// Pre: `strip` is sorted by y ascending.
pub fn strip_merge(incumbent: Pair, strip: &[Point]) -> Pair {
    let start = Candidate::new(incumbent.a, incumbent.b);
    let mut stats = Stats::default();
    match merge(prefer(None, start), strip, &mut NoopPort, &mut stats) {
        Ok(Some(best)) => best.pair,
        // NoopPort never stops; a NaN incumbent with no finite strip pair stays as given.
        _ => incumbent,
    }
}

/// Strip scan with event emission. A `None` incumbent scans with `min_dist = ∞`.
pub(crate) fn merge<P: VisualizationPort + ?Sized>(
    incumbent: Option<Candidate>,
    strip: &[Point],
    port: &mut P,
    stats: &mut Stats,
) -> Result<Option<Candidate>, ClosestPairError> {
    let mut best = incumbent;
    stats.strip_points += strip.len();
    for i in 0..strip.len() {
        let mut j = i + 1;
        while j < strip.len() && strip[j].y - strip[i].y < min_dist(&best) {
            stats.strip_comparisons += 1;
            let d = distance(&strip[i], &strip[j]);
            if d < min_dist(&best) || (best.is_none() && !d.is_nan()) {
                let c = Candidate {
                    pair: Pair::new(strip[i], strip[j]),
                    dist: d,
                };
                best = Some(c);
                port.on_pair_updated(&c.pair).obey()?;
            }
            j += 1;
        }
    }
    Ok(best)
}

#[inline]
fn min_dist(best: &Option<Candidate>) -> f64 {
    best.map_or(f64::INFINITY, |c| c.dist)
}
