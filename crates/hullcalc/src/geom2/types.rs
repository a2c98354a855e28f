//! Basic 2D types and tolerances shared by the hull and metric routines.
//!
//! - `Point`: plain `nalgebra::Vector2<f64>`; a point has no identity beyond its coordinates.
//! - `Circle`: center + radius, used for the incircle and the circumcircle.
//! - `GeomCfg`: centralizes the epsilons for duplicate merging and degeneracy checks.
//!
//! Code cross-refs: `hull::convex_hull`, `metrics::{incircle, circumcircle}`

use nalgebra::Vector2;
use serde::Serialize;

/// A user-entered or derived 2D coordinate pair.
pub type Point = Vector2<f64>;

/// Shorthand constructor.
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Points closer than this (absolute distance) count as one point.
    pub eps_dup: f64,
    /// Relative degeneracy threshold: a hull whose area is at or below
    /// `eps_area * diag²` (diag = bounding-box diagonal) is degenerate, and a
    /// vertex whose turn is at or below `eps_area * |ab| * |bc|` is collinear.
    pub eps_area: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_dup: 1e-12,
            eps_area: 1e-12,
        }
    }
}

/// Circle in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        (p - self.center).norm() <= self.radius + eps
    }
}
