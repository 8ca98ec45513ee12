//! One-time sorting for the recursion.
//!
//! Each point carries its x-rank (position in the stable x-sort). A frame owns a
//! contiguous rank range, so the y-sorted view is split by rank rather than by
//! comparing against `mid_x`; repeated x values then land in the same half in
//! both views.

use std::cmp::Ordering;

use crate::geometry::Point;

/// Point tagged with its x-rank.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Ranked {
    pub p: Point,
    pub rank: usize,
}

/// Returns `(points_x, points_y)`: stable sorts by x and by y.
pub(crate) fn presort(points: &[Point]) -> (Vec<Ranked>, Vec<Ranked>) {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| points[i].x.total_cmp(&points[j].x));
    let mut rank = vec![0usize; points.len()];
    for (r, &i) in order.iter().enumerate() {
        rank[i] = r;
    }
    let points_x: Vec<Ranked> = order
        .iter()
        .enumerate()
        .map(|(r, &i)| Ranked { p: points[i], rank: r })
        .collect();
    let mut points_y: Vec<Ranked> = points
        .iter()
        .zip(rank)
        .map(|(p, rank)| Ranked { p: *p, rank })
        .collect();
    points_y.sort_by(|a, b| a.p.y.total_cmp(&b.p.y));
    (points_x, points_y)
}

/// Frame invariants: x-view sorted with contiguous ranks, y-view sorted and
/// holding exactly the same ranks.
pub(crate) fn frame_is_consistent(points_x: &[Ranked], points_y: &[Ranked]) -> bool {
    if points_x.len() != points_y.len() {
        return false;
    }
    let Some(first) = points_x.first() else {
        return true;
    };
    let lo = first.rank;
    let hi = lo + points_x.len();
    let x_sorted = points_x
        .windows(2)
        .all(|w| w[0].p.x.total_cmp(&w[1].p.x) != Ordering::Greater);
    let x_contiguous = points_x.iter().enumerate().all(|(k, r)| r.rank == lo + k);
    let y_sorted = points_y
        .windows(2)
        .all(|w| w[0].p.y.total_cmp(&w[1].p.y) != Ordering::Greater);
    let mut seen = vec![false; points_x.len()];
    let y_members = points_y.iter().all(|r| {
        if r.rank < lo || r.rank >= hi || seen[r.rank - lo] {
            return false;
        }
        seen[r.rank - lo] = true;
        true
    });
    x_sorted && x_contiguous && y_sorted && y_members
}
