//! Points, pairs, and the x-interval of a subproblem.
//!
//! - `Point`: alias for `nalgebra::Point2<f64>`; value semantics, no id.
//! - `Pair`: two entries of the active point set, `a` found first in scan order.
//! - `SubproblemBounds`: the x-interval a recursion frame is solving.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// 2D point with `f64` coordinates.
pub type Point = Point2<f64>;

/// Euclidean distance `sqrt((p1.x-p2.x)^2 + (p1.y-p2.y)^2)`.
///
/// NaN and infinite coordinates propagate per IEEE-754.
#[inline]
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

/// Two points of the active set. Conceptually unordered.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub a: Point,
    pub b: Point,
}

impl Pair {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn distance(&self) -> f64 {
        distance(&self.a, &self.b)
    }
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.a == *p || self.b == *p
    }
    /// Value equality ignoring order: `{a, b} == {other.a, other.b}`.
    pub fn same_points(&self, other: &Pair) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

/// X-interval `[x_start, x_end]` of a subproblem.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubproblemBounds {
    pub x_start: f64,
    pub x_end: f64,
}

impl SubproblemBounds {
    #[inline]
    pub fn new(x_start: f64, x_end: f64) -> Self {
        Self { x_start, x_end }
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_end - self.x_start
    }
    #[inline]
    pub fn contains_x(&self, x: f64) -> bool {
        self.x_start <= x && x <= self.x_end
    }
}
