//! 2D geometry for convex polygons built from user-entered points.
//!
//! Purpose
//! - Compute the convex hull of a point set (CCW, strict corners only).
//! - Derive area, perimeter, and the incircle/circumcircle estimates from the
//!   ordered hull vertices.
//! - Keep the API minimal and numerically explicit (eps-aware via `GeomCfg`).
//!
//! Code cross-refs: `Point`, `Circle`, `GeomCfg`, `convex_hull`, `PolygonMetrics`

mod hull;
pub mod metrics;
pub mod rand;
mod types;

pub use hull::{convex_hull, HullError};
pub use metrics::{
    circumcircle, distance, incenter, incircle, inradius, polygon_area, polygon_perimeter,
    PolygonMetrics,
};
pub use types::{pt, Circle, GeomCfg, Point};
