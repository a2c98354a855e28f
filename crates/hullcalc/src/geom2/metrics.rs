//! Closed-form metrics of a polygon given by its ordered vertices.
//!
//! - `polygon_area`, `polygon_perimeter`: shoelace sum and edge-length sum, indices
//!   taken modulo the vertex count (polygon implicitly closed).
//! - `inradius`, `incenter`: `2A/P` and the length-weighted centroid of edge midpoints.
//!   Exact for triangles only; for other polygons these are approximations.
//! - `circumcircle`: circle on the farthest vertex pair (polygon diameter). This does
//!   not necessarily contain every vertex; it is the farthest-pair estimate.
//!
//! Code cross-refs: `hull::convex_hull`, `crate::report::Report`

use serde::Serialize;

use super::types::{pt, Circle, Point};

/// Euclidean distance.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p1 - p2).norm()
}

/// Consecutive vertex pairs `(v_i, v_{i+1 mod n})`.
fn edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

/// Shoelace area, always non-negative.
pub fn polygon_area(vertices: &[Point]) -> f64 {
    let twice: f64 = edges(vertices).map(|(a, b)| a.x * b.y - b.x * a.y).sum();
    0.5 * twice.abs()
}

/// Sum of edge lengths, wrapping from the last vertex to the first.
pub fn polygon_perimeter(vertices: &[Point]) -> f64 {
    edges(vertices).map(|(a, b)| distance(a, b)).sum()
}

/// `2 * area / perimeter`, or 0 when either is non-positive.
pub fn inradius(vertices: &[Point]) -> f64 {
    let area = polygon_area(vertices);
    let perimeter = polygon_perimeter(vertices);
    if perimeter <= 0.0 || area <= 0.0 {
        return 0.0;
    }
    2.0 * area / perimeter
}

/// Edge-length weighted centroid of edge midpoints; origin when the perimeter vanishes.
pub fn incenter(vertices: &[Point]) -> Point {
    let perimeter = polygon_perimeter(vertices);
    if perimeter <= 0.0 {
        return pt(0.0, 0.0);
    }
    let acc = edges(vertices).fold(pt(0.0, 0.0), |acc, (a, b)| {
        acc + (a + b) * distance(a, b)
    });
    acc / (2.0 * perimeter)
}

/// Incircle estimate: `incenter` with `inradius`.
pub fn incircle(vertices: &[Point]) -> Circle {
    Circle::new(incenter(vertices), inradius(vertices))
}

/// Circle through the midpoint of the farthest vertex pair, radius half their distance.
///
/// O(n²) scan; the first pair reaching the maximum (in `i < j` order) wins.
/// With fewer than two distinct vertices the circle collapses onto the first
/// vertex (or the origin for an empty slice).
pub fn circumcircle(vertices: &[Point]) -> Circle {
    let mut best: Option<(Point, Point)> = None;
    let mut max_distance = 0.0;
    for (i, &a) in vertices.iter().enumerate() {
        for &b in &vertices[i + 1..] {
            let d = distance(a, b);
            if d > max_distance {
                max_distance = d;
                best = Some((a, b));
            }
        }
    }
    match best {
        Some((a, b)) => Circle::new((a + b) / 2.0, max_distance / 2.0),
        None => Circle::new(vertices.first().copied().unwrap_or_else(|| pt(0.0, 0.0)), 0.0),
    }
}

/// All derived quantities of one polygon, computed together.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PolygonMetrics {
    pub area: f64,
    pub perimeter: f64,
    pub incircle: Circle,
    pub circumcircle: Circle,
}

impl PolygonMetrics {
    pub fn of(vertices: &[Point]) -> Self {
        Self {
            area: polygon_area(vertices),
            perimeter: polygon_perimeter(vertices),
            incircle: incircle(vertices),
            circumcircle: circumcircle(vertices),
        }
    }
}
