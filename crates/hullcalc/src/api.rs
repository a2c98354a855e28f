//! Front-end facing surface: everything a shell needs to drive a session and
//! show its results, in one import.

pub use crate::geom2::rand::{draw_cloud, CloudCfg, ReplayToken};
pub use crate::geom2::{pt, GeomCfg, HullError, Point, PolygonMetrics};
pub use crate::render::{render_svg, RenderCfg};
pub use crate::report::Report;
pub use crate::session::{Field, Session, SessionError, TOO_FEW_VERTICES};

/// Calculate and render a fixed point list in one step.
pub fn report_and_svg(
    points: &[Point],
    geom: &GeomCfg,
    render: &RenderCfg,
) -> Result<(Report, String), SessionError> {
    let mut session = Session::with_cfg(*geom);
    for p in points {
        session.add(p.x, p.y);
    }
    let report = session.calculate()?;
    let svg = render_svg(&report, render)?;
    Ok((report, svg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_matches_session() {
        let points = vec![pt(0.0, 0.0), pt(3.0, 0.0), pt(0.0, 4.0)];
        let (report, svg) =
            report_and_svg(&points, &GeomCfg::default(), &RenderCfg::default()).unwrap();
        let mut s = Session::new();
        for p in &points {
            s.add(p.x, p.y);
        }
        assert_eq!(s.calculate().unwrap(), report);
        assert!((report.metrics.area - 6.0).abs() < 1e-12);
        assert!((report.metrics.perimeter - 12.0).abs() < 1e-12);
        // 3-4-5 triangle: inradius (a+b-c)/2 = 1 is exact for triangles
        assert!((report.metrics.incircle.radius - 1.0).abs() < 1e-12);
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn one_shot_rejects_two_points() {
        let err = report_and_svg(
            &[pt(0.0, 0.0), pt(1.0, 0.0)],
            &GeomCfg::default(),
            &RenderCfg::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), TOO_FEW_VERTICES);
    }

    #[test]
    fn one_shot_honors_geometry_cfg() {
        let points = vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0)];
        let loose = GeomCfg {
            eps_area: 0.6,
            ..GeomCfg::default()
        };
        // area 0.5 against diag² = 2: degenerate once eps_area exceeds 0.25
        let err = report_and_svg(&points, &loose, &RenderCfg::default()).unwrap_err();
        assert!(matches!(err, SessionError::Hull(HullError::Degenerate { distinct: 3 })));
        assert!(report_and_svg(&points, &GeomCfg::default(), &RenderCfg::default()).is_ok());
    }
}
