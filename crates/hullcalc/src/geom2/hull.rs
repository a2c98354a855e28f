//! Convex hull of a point set, delegated to `geo::ConvexHull`.
//!
//! The ring `geo` returns is normalized before use: closing repeat dropped,
//! duplicate and collinear vertices removed, counterclockwise, starting from the
//! lowest-x (then lowest-y) vertex. Every returned vertex is a strict corner.

use std::cmp::Ordering;
use std::fmt;

use geo::{coord, ConvexHull, Coord, MultiPoint};

use super::metrics::polygon_area;
use super::types::{pt, GeomCfg, Point};

/// Errors surfaced by the hull routine.
#[derive(Clone, Debug, PartialEq)]
pub enum HullError {
    /// Fewer than three input points.
    TooFewPoints { got: usize },
    /// An input coordinate is NaN or infinite.
    NonFinite { index: usize },
    /// Points do not span a 2D region (all coincident or collinear).
    Degenerate { distinct: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::TooFewPoints { got } => {
                write!(f, "convex hull needs at least 3 points, got {got}")
            }
            HullError::NonFinite { index } => {
                write!(f, "point #{} has a non-finite coordinate", index + 1)
            }
            HullError::Degenerate { distinct } => write!(
                f,
                "points are collinear or coincident ({distinct} distinct); no polygon can be formed"
            ),
        }
    }
}

impl std::error::Error for HullError {}

#[inline]
fn lexicographic(a: &Point, b: &Point) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// Number of points left after merging those closer than `eps_dup`.
fn distinct_count(points: &[Point], cfg: &GeomCfg) -> usize {
    let mut pts = points.to_vec();
    pts.sort_by(lexicographic);
    pts.dedup_by(|a, b| (*a - *b).norm() < cfg.eps_dup);
    pts.len()
}

/// `b` adds nothing to the ring `a → b → c`: it repeats `a` or lies on segment `ac`.
fn redundant(a: Point, b: Point, c: Point, cfg: &GeomCfg) -> bool {
    let ab = b - a;
    let bc = c - b;
    if ab.norm() < cfg.eps_dup {
        return true;
    }
    let turn = ab.x * bc.y - ab.y * bc.x;
    turn.abs() <= cfg.eps_area * ab.norm() * bc.norm()
}

/// Strip a closed `geo` ring down to strict corners (may leave fewer than 3).
fn strict_corners(ring: Vec<Point>, cfg: &GeomCfg) -> Vec<Point> {
    let mut ring = ring;
    if ring.len() > 1 && (ring[0] - ring[ring.len() - 1]).norm() < cfg.eps_dup {
        ring.pop();
    }
    let mut k = 0;
    while ring.len() >= 3 && k < ring.len() {
        let n = ring.len();
        if redundant(ring[(k + n - 1) % n], ring[k], ring[(k + 1) % n], cfg) {
            ring.remove(k);
            k = k.saturating_sub(1);
        } else {
            k += 1;
        }
    }
    ring
}

/// Convex hull vertices in CCW order (polygon implicitly closed).
///
/// Input order and duplicates do not matter; the input slice is not modified.
/// The degeneracy test is scale-free: hull area is compared against
/// `eps_area` times the squared bounding-box diagonal.
pub fn convex_hull(points: &[Point], cfg: &GeomCfg) -> Result<Vec<Point>, HullError> {
    if points.len() < 3 {
        return Err(HullError::TooFewPoints { got: points.len() });
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite { index });
    }
    let distinct = distinct_count(points, cfg);
    if distinct < 3 {
        return Err(HullError::Degenerate { distinct });
    }

    let cloud = MultiPoint::from(
        points
            .iter()
            .map(|p| coord! { x: p.x, y: p.y })
            .collect::<Vec<Coord>>(),
    );
    let polygon = cloud.convex_hull();
    let ring: Vec<Point> = polygon.exterior().coords().map(|c| pt(c.x, c.y)).collect();
    let mut hull = strict_corners(ring, cfg);
    if hull.len() < 3 {
        return Err(HullError::Degenerate { distinct });
    }

    let lo = hull.iter().copied().fold(hull[0], |m, p| m.inf(&p));
    let hi = hull.iter().copied().fold(hull[0], |m, p| m.sup(&p));
    let extent2 = (hi - lo).norm_squared();
    let signed: f64 = (0..hull.len())
        .map(|i| {
            let (a, b) = (hull[i], hull[(i + 1) % hull.len()]);
            a.x * b.y - b.x * a.y
        })
        .sum();
    if signed < 0.0 {
        hull.reverse();
    }
    if polygon_area(&hull) <= cfg.eps_area * extent2 {
        return Err(HullError::Degenerate { distinct });
    }
    if let Some(start) = (0..hull.len()).min_by(|&i, &j| lexicographic(&hull[i], &hull[j])) {
        hull.rotate_left(start);
    }
    tracing::debug!(input = points.len(), distinct, hull = hull.len(), "convex_hull");
    Ok(hull)
}
