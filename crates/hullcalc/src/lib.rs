//! Convex hull of entered points, plus area, perimeter and circle estimates.
//!
//! Data flow: points go into a `Session`, `Session::calculate` hulls them
//! (`geom2::convex_hull`), measures the hull (`geom2::PolygonMetrics`), and
//! returns a `Report` that can be printed (`Report::summary`) or drawn
//! (`render::render_svg`).

pub mod api;
pub mod geom2;
pub mod render;
pub mod report;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Circle, GeomCfg, HullError, Point};
pub use report::Report;
pub use session::{Session, SessionError};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_cloud, CloudCfg, ReplayToken};
    pub use crate::geom2::{
        circumcircle, convex_hull, distance, incenter, incircle, inradius, polygon_area,
        polygon_perimeter, pt, Circle, GeomCfg, HullError, Point, PolygonMetrics,
    };
    pub use nalgebra::Vector2 as Vec2;
}
