//! SVG chart of a `Report`: entered points, hull outline, both circles,
//! center markers and hull vertex labels.
//!
//! Data coordinates are mapped with one scale for both axes (equal aspect) and
//! y pointing up. The plot area is centered in the canvas.

use std::fmt::{self, Write};

use crate::geom2::{Circle, Point};
use crate::report::Report;

const POINT_COLOR: &str = "#1f77b4"; // blue
const HULL_COLOR: &str = "#d62728"; // red
const INCIRCLE_COLOR: &str = "#2ca02c"; // green
const GRID_COLOR: &str = "#b0b0b0";

/// SVG rendering configuration.
#[derive(Clone, Debug)]
pub struct RenderCfg {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Padding around the data (fraction of the data extent).
    pub padding: f64,
    pub grid: bool,
    pub legend: bool,
    /// Font size of hull vertex labels, in points.
    pub label_font_size: f64,
    pub title: String,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 0.05,
            grid: true,
            legend: true,
            label_font_size: 8.0,
            title: "Convex Hull Polygon with Incircle and Circumcircle".to_string(),
        }
    }
}

// Plot area margins in pixels.
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 55.0;

/// Axis-aligned extent in data coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    fn of_report(r: &Report) -> Self {
        let mut b = Bounds {
            min: Point::new(f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        };
        for p in r.points.iter().chain(&r.hull) {
            b.include(*p);
        }
        for c in [r.metrics.incircle, r.metrics.circumcircle] {
            b.include_circle(&c);
        }
        b
    }

    fn include(&mut self, p: Point) {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return;
        }
        self.min = self.min.inf(&p);
        self.max = self.max.sup(&p);
    }

    fn include_circle(&mut self, c: &Circle) {
        let r = Point::new(c.radius, c.radius);
        self.include(c.center - r);
        self.include(c.center + r);
    }

    /// Grow by `frac` of the extent on every side; give empty axes a unit extent.
    fn padded(self, frac: f64) -> Self {
        let mut size = self.max - self.min;
        let mut min = self.min;
        for k in 0..2 {
            if !(size[k] > 0.0) {
                min[k] -= 0.5;
                size[k] = 1.0;
            }
        }
        let pad = size * frac;
        Bounds {
            min: min - pad,
            max: min + size + pad,
        }
    }
}

/// Data → pixel mapping with equal scaling on both axes.
#[derive(Clone, Copy, Debug)]
struct Frame {
    bounds: Bounds,
    scale: f64,
    origin: Point, // pixel position of bounds.min
}

impl Frame {
    fn new(bounds: Bounds, cfg: &RenderCfg) -> Self {
        let plot_w = (cfg.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_h = (cfg.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        let size = bounds.max - bounds.min;
        let scale = (plot_w / size.x).min(plot_h / size.y);
        let used = size * scale;
        let origin = Point::new(
            MARGIN_LEFT + 0.5 * (plot_w - used.x),
            MARGIN_TOP + plot_h - 0.5 * (plot_h - used.y),
        );
        Frame {
            bounds,
            scale,
            origin,
        }
    }

    #[inline]
    fn px(&self, p: Point) -> Point {
        Point::new(
            self.origin.x + (p.x - self.bounds.min.x) * self.scale,
            self.origin.y - (p.y - self.bounds.min.y) * self.scale,
        )
    }
}

/// Step in {1, 2, 5}·10^k giving roughly `target` intervals across `range`.
fn nice_step(range: f64, target: f64) -> f64 {
    let raw = range / target.max(1.0);
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let m = if norm < 1.5 {
        1.0
    } else if norm < 3.5 {
        2.0
    } else if norm < 7.5 {
        5.0
    } else {
        10.0
    };
    m * mag
}

fn ticks(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

fn tick_label(v: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    // avoid "-0"
    let v = if v.abs() < step * 1e-9 { 0.0 } else { v };
    format!("{v:.decimals$}")
}

fn write_axes(svg: &mut String, f: &Frame, cfg: &RenderCfg) -> fmt::Result {
    let lo = f.px(f.bounds.min);
    let hi = f.px(f.bounds.max);
    writeln!(
        svg,
        r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="black" stroke-width="1"/>"#,
        lo.x,
        hi.y,
        hi.x - lo.x,
        lo.y - hi.y
    )?;
    let size = f.bounds.max - f.bounds.min;
    let step = nice_step(size.x.max(size.y), 8.0);
    for x in ticks(f.bounds.min.x, f.bounds.max.x, step) {
        let p = f.px(Point::new(x, f.bounds.min.y));
        if cfg.grid {
            writeln!(
                svg,
                r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{GRID_COLOR}" stroke-width="0.8"/>"#,
                p.x, lo.y, p.x, hi.y
            )?;
        }
        writeln!(
            svg,
            r#"  <text x="{:.2}" y="{:.2}" font-size="11" text-anchor="middle">{}</text>"#,
            p.x,
            lo.y + 16.0,
            tick_label(x, step)
        )?;
    }
    for y in ticks(f.bounds.min.y, f.bounds.max.y, step) {
        let p = f.px(Point::new(f.bounds.min.x, y));
        if cfg.grid {
            writeln!(
                svg,
                r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{GRID_COLOR}" stroke-width="0.8"/>"#,
                lo.x, p.y, hi.x, p.y
            )?;
        }
        writeln!(
            svg,
            r#"  <text x="{:.2}" y="{:.2}" font-size="11" text-anchor="end">{}</text>"#,
            lo.x - 6.0,
            p.y + 4.0,
            tick_label(y, step)
        )?;
    }
    writeln!(
        svg,
        r#"  <text x="{:.2}" y="{:.2}" font-size="13" text-anchor="middle">X-coordinate</text>"#,
        0.5 * (lo.x + hi.x),
        cfg.height - 12.0
    )?;
    let ylab = Point::new(18.0, 0.5 * (lo.y + hi.y));
    writeln!(
        svg,
        r#"  <text x="{:.2}" y="{:.2}" font-size="13" text-anchor="middle" transform="rotate(-90 {:.2} {:.2})">Y-coordinate</text>"#,
        ylab.x, ylab.y, ylab.x, ylab.y
    )?;
    writeln!(
        svg,
        r#"  <text x="{:.2}" y="24" font-size="15" text-anchor="middle">{}</text>"#,
        0.5 * cfg.width,
        cfg.title
    )
}

fn write_circle(svg: &mut String, f: &Frame, c: &Circle, color: &str, dashed: bool) -> fmt::Result {
    let p = f.px(c.center);
    let dash = if dashed { r#" stroke-dasharray="6,4""# } else { "" };
    writeln!(
        svg,
        r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{color}" stroke-width="1.5"{dash}/>"#,
        p.x,
        p.y,
        c.radius * f.scale
    )
}

fn write_cross(svg: &mut String, at: Point, half: f64, color: &str) -> fmt::Result {
    writeln!(
        svg,
        r#"  <path d="M {:.2} {:.2} L {:.2} {:.2} M {:.2} {:.2} L {:.2} {:.2}" stroke="{color}" stroke-width="2"/>"#,
        at.x - half,
        at.y - half,
        at.x + half,
        at.y + half,
        at.x - half,
        at.y + half,
        at.x + half,
        at.y - half
    )
}

fn write_legend(svg: &mut String, cfg: &RenderCfg) -> fmt::Result {
    let entries: [(&str, &str); 6] = [
        ("All Points", "dot"),
        ("Convex Hull", "line"),
        ("Incircle", "green"),
        ("Circumcircle", "dash"),
        ("Incenter", "xgreen"),
        ("Circumcenter", "xred"),
    ];
    let x0 = cfg.width - MARGIN_RIGHT - 150.0;
    let y0 = MARGIN_TOP + 8.0;
    writeln!(
        svg,
        r#"  <rect x="{:.2}" y="{:.2}" width="140" height="{}" fill="white" fill-opacity="0.85" stroke="{GRID_COLOR}"/>"#,
        x0,
        y0,
        entries.len() * 18 + 8
    )?;
    for (k, (label, glyph)) in entries.iter().enumerate() {
        let y = y0 + 16.0 + 18.0 * k as f64;
        let (a, b) = (x0 + 8.0, x0 + 32.0);
        let mid = Point::new(0.5 * (a + b), y - 4.0);
        match *glyph {
            "dot" => writeln!(
                svg,
                r#"  <circle cx="{:.2}" cy="{:.2}" r="4" fill="{POINT_COLOR}"/>"#,
                mid.x, mid.y
            )?,
            "line" | "green" | "dash" => {
                let (color, width, dash) = match *glyph {
                    "line" => (HULL_COLOR, 2.0, ""),
                    "green" => (INCIRCLE_COLOR, 1.5, ""),
                    _ => (HULL_COLOR, 1.5, r#" stroke-dasharray="6,4""#),
                };
                writeln!(
                    svg,
                    r#"  <line x1="{a:.2}" y1="{:.2}" x2="{b:.2}" y2="{:.2}" stroke="{color}" stroke-width="{width}"{dash}/>"#,
                    mid.y, mid.y
                )?
            }
            "xgreen" => write_cross(svg, mid, 5.0, INCIRCLE_COLOR)?,
            _ => write_cross(svg, mid, 5.0, HULL_COLOR)?,
        }
        writeln!(
            svg,
            r#"  <text x="{:.2}" y="{:.2}" font-size="12">{label}</text>"#,
            b + 8.0,
            y
        )?;
    }
    Ok(())
}

/// Render the chart for `report` as a standalone SVG document.
pub fn render_svg(report: &Report, cfg: &RenderCfg) -> Result<String, fmt::Error> {
    let frame = Frame::new(Bounds::of_report(report).padded(cfg.padding), cfg);
    let mut svg = String::new();

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" font-family="sans-serif">"#,
        cfg.width, cfg.height, cfg.width, cfg.height
    )?;
    writeln!(
        svg,
        r#"  <rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        cfg.width, cfg.height
    )?;
    write_axes(&mut svg, &frame, cfg)?;

    for p in &report.points {
        let q = frame.px(*p);
        writeln!(
            svg,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="4" fill="{POINT_COLOR}"/>"#,
            q.x, q.y
        )?;
    }

    if let Some(first) = report.hull.first() {
        let mut d = String::new();
        for (k, p) in report.hull.iter().chain(std::iter::once(first)).enumerate() {
            let q = frame.px(*p);
            let cmd = if k == 0 { "M" } else { "L" };
            write!(d, "{cmd} {:.2} {:.2} ", q.x, q.y)?;
        }
        writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{HULL_COLOR}" stroke-width="2"/>"#,
            d.trim_end()
        )?;
    }

    let m = &report.metrics;
    write_circle(&mut svg, &frame, &m.incircle, INCIRCLE_COLOR, false)?;
    write_circle(&mut svg, &frame, &m.circumcircle, HULL_COLOR, true)?;
    write_cross(&mut svg, frame.px(m.incircle.center), 6.0, INCIRCLE_COLOR)?;
    write_cross(&mut svg, frame.px(m.circumcircle.center), 6.0, HULL_COLOR)?;

    for v in &report.hull {
        let q = frame.px(*v);
        writeln!(
            svg,
            r#"  <text x="{:.2}" y="{:.2}" font-size="{}pt" text-anchor="end">({:?},{:?})</text>"#,
            q.x, q.y, cfg.label_font_size, v.x, v.y
        )?;
    }

    if cfg.legend {
        write_legend(&mut svg, cfg)?;
    }
    writeln!(svg, "</svg>")?;
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::{pt, GeomCfg};

    fn square_report() -> Report {
        let points = vec![
            pt(0.0, 0.0),
            pt(4.0, 0.0),
            pt(4.0, 4.0),
            pt(0.0, 4.0),
            pt(2.0, 1.0),
        ];
        Report::compute(&points, &GeomCfg::default()).unwrap()
    }

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(10.0, 10.0), 1.0);
        assert_eq!(nice_step(20.0, 10.0), 2.0);
        assert!((nice_step(0.5, 10.0) - 0.05).abs() < 1e-12);
        assert_eq!(ticks(-0.5, 2.1, 1.0), vec![0.0, 1.0, 2.0]);
        assert_eq!(tick_label(0.25, 0.05), "0.25");
        assert_eq!(tick_label(-0.0, 1.0), "0");
    }

    #[test]
    fn frame_keeps_equal_aspect_and_y_up() {
        let b = Bounds {
            min: pt(0.0, 0.0),
            max: pt(2.0, 1.0),
        };
        let f = Frame::new(b, &RenderCfg::default());
        let o = f.px(pt(0.0, 0.0));
        let ex = f.px(pt(1.0, 0.0)) - o;
        let ey = f.px(pt(0.0, 1.0)) - o;
        assert!((ex.x - f.scale).abs() < 1e-9 && ex.y.abs() < 1e-9);
        assert!((ey.y + f.scale).abs() < 1e-9 && ey.x.abs() < 1e-9);
    }

    #[test]
    fn bounds_cover_circles() {
        let r = square_report();
        let b = Bounds::of_report(&r);
        let c = r.metrics.circumcircle;
        assert!(b.min.x <= c.center.x - c.radius + 1e-12);
        assert!(b.max.y >= c.center.y + c.radius - 1e-12);
    }

    #[test]
    fn svg_contains_every_chart_element() {
        let r = square_report();
        let svg = render_svg(&r, &RenderCfg::default()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        // 5 entered points + 1 legend dot
        assert_eq!(svg.matches(r#"r="4" fill="#).count(), 6);
        // closed hull path: 4 vertices + return to start
        assert!(svg.contains("fill=\"none\" stroke=\"#d62728\" stroke-width=\"2\""));
        assert_eq!(svg.matches("stroke-dasharray").count(), 2);
        assert!(svg.contains("(0.0,0.0)"));
        assert!(svg.contains("(4.0,4.0)"));
        assert!(svg.contains("X-coordinate"));
        assert!(svg.contains("Y-coordinate"));
        assert!(svg.contains("Convex Hull Polygon with Incircle and Circumcircle"));
        assert!(svg.contains(">Circumcenter</text>"));
    }

    #[test]
    fn legend_and_grid_can_be_disabled() {
        let r = square_report();
        let cfg = RenderCfg {
            grid: false,
            legend: false,
            ..RenderCfg::default()
        };
        let svg = render_svg(&r, &cfg).unwrap();
        assert!(!svg.contains(">Circumcenter</text>"));
        assert!(!svg.contains(GRID_COLOR));
    }
}
