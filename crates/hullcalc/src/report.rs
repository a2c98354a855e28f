//! One calculation result: entered points, their hull, and the hull metrics.

use serde::Serialize;

use crate::geom2::{convex_hull, GeomCfg, HullError, Point, PolygonMetrics};

/// Result of a single calculate request. Never cached; rebuilt from the point store.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    /// All entered points, in entry order.
    pub points: Vec<Point>,
    /// Hull vertices, CCW, implicitly closed.
    pub hull: Vec<Point>,
    pub metrics: PolygonMetrics,
}

impl Report {
    /// Hull the points and measure the hull polygon.
    pub fn compute(points: &[Point], cfg: &GeomCfg) -> Result<Self, HullError> {
        let hull = convex_hull(points, cfg)?;
        let metrics = PolygonMetrics::of(&hull);
        Ok(Self {
            points: points.to_vec(),
            hull,
            metrics,
        })
    }

    /// Six-line text summary: metrics to 6 decimals, centers to 2.
    pub fn summary(&self) -> String {
        let m = &self.metrics;
        format!(
            "Convex Hull Area: {:.6}\n\
             Convex Hull Perimeter: {:.6}\n\
             Inradius: {:.6}\n\
             Incenter: ({:.2}, {:.2})\n\
             Circumradius: {:.6}\n\
             Circumcenter: ({:.2}, {:.2})",
            m.area,
            m.perimeter,
            m.incircle.radius,
            m.incircle.center.x,
            m.incircle.center.y,
            m.circumcircle.radius,
            m.circumcircle.center.x,
            m.circumcircle.center.y,
        )
    }
}
