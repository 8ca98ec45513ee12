//! Per-frame state machine: open → (leaf | split → left → right → combine →
//! strip) → close.

use crate::brute_force;
use crate::error::ClosestPairError;
use crate::geometry::{Point, SubproblemBounds};
use crate::port::VisualizationPort;
use crate::strip::{build_strip, merge, strip_bounds};
use crate::types::{Candidate, EngineCfg, Stats};

use super::presort::{frame_is_consistent, Ranked};

/// Runner carrying the port, configuration, and run-wide counters.
pub(super) struct Runner<'p, P: ?Sized> {
    port: &'p mut P,
    leaf_size: usize,
    pub stats: Stats,
}

impl<'p, P: VisualizationPort + ?Sized> Runner<'p, P> {
    pub fn new(port: &'p mut P, cfg: EngineCfg) -> Self {
        Self {
            port,
            leaf_size: cfg.effective_leaf_size(),
            stats: Stats::default(),
        }
    }

    /// Solve one frame. Absent boundaries resolve to the frame's x-extent.
    ///
    /// Pre: `points_x.len() >= 2` (guaranteed for every frame by `leaf_size >= 3`).
    pub fn recur(
        &mut self,
        points_x: &[Ranked],
        points_y: &[Ranked],
        left: Option<f64>,
        right: Option<f64>,
        depth: usize,
    ) -> Result<Option<Candidate>, ClosestPairError> {
        debug_assert!(points_x.len() >= 2);
        debug_assert!(frame_is_consistent(points_x, points_y));
        self.stats.frames += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let n = points_x.len();
        let bounds = SubproblemBounds::new(
            left.unwrap_or(points_x[0].p.x),
            right.unwrap_or(points_x[n - 1].p.x),
        );
        self.port.on_subproblem_open(bounds).obey()?;

        if n <= self.leaf_size {
            self.stats.leaves += 1;
            let pts: Vec<Point> = points_x.iter().map(|r| r.p).collect();
            let best = brute_force::scan(&pts, &mut self.stats.brute_force_comparisons);
            return self.close(best);
        }

        let mid = n / 2;
        let mid_x = points_x[mid].p.x;
        let mid_rank = points_x[mid].rank;
        self.port.on_divider_drawn(mid_x).obey()?;

        let (left_y, right_y): (Vec<Ranked>, Vec<Ranked>) =
            points_y.iter().partition(|r| r.rank < mid_rank);
        let pair_left = self.recur(
            &points_x[..mid],
            &left_y,
            Some(bounds.x_start),
            Some(mid_x),
            depth + 1,
        )?;
        let pair_right = self.recur(
            &points_x[mid..],
            &right_y,
            Some(mid_x),
            Some(bounds.x_end),
            depth + 1,
        )?;

        let mut best = pair_left;
        if let Some(c) = best {
            self.port.on_pair_updated(&c.pair).obey()?;
        }
        if let Some(r) = pair_right {
            if best.map_or(true, |c| c.is_beaten_by(r.dist)) {
                best = Some(r);
                self.port.on_pair_updated(&r.pair).obey()?;
            }
        }

        let min_dist = best.map_or(f64::INFINITY, |c| c.dist);
        self.port
            .on_strip_opened(strip_bounds(mid_x, min_dist))
            .obey()?;
        let strip = build_strip(points_y.iter().map(|r| &r.p), mid_x, min_dist);
        let best = merge(best, &strip, &mut *self.port, &mut self.stats)?;
        self.close(best)
    }

    fn close(&mut self, best: Option<Candidate>) -> Result<Option<Candidate>, ClosestPairError> {
        if let Some(c) = best {
            self.port.on_pair_found(&c.pair).obey()?;
        }
        self.port.on_subproblem_close().obey()?;
        Ok(best)
    }
}
