//! Closest pair of points by divide and conquer, with step events for animation.
//!
//! Layout
//! - `geometry`: `Point`, `Pair`, `SubproblemBounds`, `distance`.
//! - `brute_force`: exhaustive solver for small sets (leaves, reference).
//! - `strip`: merge across the divider with the bounded strip scan.
//! - `engine`: recursive orchestrator emitting events into a port.
//! - `port`: `VisualizationPort` trait, `Step`, `Event`, and stock ports.
//! - `rand`: seeded point-set samplers.
//!
//! The core does no rendering and no logging; front-ends observe a run through
//! the port and pace or cancel it through the returned `Step`.

pub mod brute_force;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod port;
pub mod rand;
pub mod strip;
mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use brute_force::brute_force;
pub use engine::{closest_pair, closest_pair_with};
pub use error::ClosestPairError;
pub use geometry::{distance, Pair, Point, SubproblemBounds};
pub use port::{Event, NoopPort, Paced, Recorder, Step, VisualizationPort};
pub use strip::strip_merge;
pub use types::{EngineCfg, Solution, Stats};

/// Reference solver with the engine's error contract (no events).
pub fn closest_pair_brute(points: &[Point]) -> Result<Solution, ClosestPairError> {
    if points.len() < 2 {
        return Err(ClosestPairError::InsufficientInput { len: points.len() });
    }
    let mut stats = Stats {
        frames: 1,
        leaves: 1,
        ..Stats::default()
    };
    let best = brute_force::scan(points, &mut stats.brute_force_comparisons)
        .ok_or(ClosestPairError::NoComparablePair)?;
    Ok(Solution {
        pair: best.pair,
        distance: best.dist,
        stats,
    })
}

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{draw_points, ClusterCfg, Layout, ReplayToken, UniformCfg};
    pub use crate::{
        brute_force, closest_pair, closest_pair_brute, closest_pair_with, distance,
        ClosestPairError, EngineCfg, Event, NoopPort, Paced, Pair, Point, Recorder, Solution,
        Stats, Step, SubproblemBounds, VisualizationPort,
    };
}
