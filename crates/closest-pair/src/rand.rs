//! Seeded point-set samplers (uniform, clustered, collinear, grid).
//!
//! Purpose
//! - Reproducible inputs for tests, benches, and the CLI's `generate`/`--random`.
//! - Adversarial layouts: collinear runs and small integer grids produce many
//!   repeated coordinates and exact duplicates.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//! draw `k` of a sweep can be regenerated without replaying draws `0..k`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::Point;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }
    /// Same seed, next index.
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform sampling in the square `[min, max]²`.
#[derive(Clone, Copy, Debug)]
pub struct UniformCfg {
    pub min: f64,
    pub max: f64,
}
impl Default for UniformCfg {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Gaussian-ish clusters: centers uniform in `[0, side]²`, offsets uniform in a
/// disc of radius `spread`.
#[derive(Clone, Copy, Debug)]
pub struct ClusterCfg {
    pub clusters: usize,
    pub spread: f64,
    pub side: f64,
}
impl Default for ClusterCfg {
    fn default() -> Self {
        Self {
            clusters: 5,
            spread: 0.01,
            side: 1.0,
        }
    }
}

/// Point-set layouts.
#[derive(Clone, Copy, Debug)]
pub enum Layout {
    Uniform(UniformCfg),
    Clustered(ClusterCfg),
    /// All points on `x = 0` (vertical) or `y = 0` (horizontal), coordinate in `[0, 1)`.
    Collinear { vertical: bool },
    /// Integer coordinates in `[0, cells)²`; duplicates once `n > cells²`.
    Grid { cells: u32 },
}

/// Draw `n` points with the given layout.
pub fn draw_points(layout: Layout, n: usize, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    match layout {
        Layout::Uniform(cfg) => {
            let (lo, hi) = if cfg.min < cfg.max {
                (cfg.min, cfg.max)
            } else {
                (cfg.min, cfg.min + 1.0)
            };
            (0..n)
                .map(|_| Point::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi)))
                .collect()
        }
        Layout::Clustered(cfg) => {
            let k = cfg.clusters.max(1);
            let side = cfg.side.max(1e-9);
            let centers: Vec<Vector2<f64>> = (0..k)
                .map(|_| Vector2::new(rng.gen::<f64>() * side, rng.gen::<f64>() * side))
                .collect();
            (0..n)
                .map(|_| {
                    let c = centers[rng.gen_range(0..k)];
                    let th = rng.gen::<f64>() * std::f64::consts::TAU;
                    let r = cfg.spread.max(0.0) * rng.gen::<f64>().sqrt();
                    Point::from(c + Vector2::new(th.cos(), th.sin()) * r)
                })
                .collect()
        }
        Layout::Collinear { vertical } => (0..n)
            .map(|_| {
                let t = rng.gen::<f64>();
                if vertical {
                    Point::new(0.0, t)
                } else {
                    Point::new(t, 0.0)
                }
            })
            .collect(),
        Layout::Grid { cells } => {
            let m = cells.max(1);
            (0..n)
                .map(|_| Point::new(rng.gen_range(0..m) as f64, rng.gen_range(0..m) as f64))
                .collect()
        }
    }
}
