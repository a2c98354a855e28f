//! Interactive session state: the point store and the last result text.
//!
//! A `Session` is owned by whatever front end drives it (the CLI shell, tests).
//! Every action is a method returning a structured result; nothing here prints.

use std::fmt;

use crate::geom2::{pt, GeomCfg, HullError, Point};
use crate::report::Report;

/// Shown when a calculation is requested with fewer than three points.
pub const TOO_FEW_VERTICES: &str = "A polygon must have at least 3 vertices.";

/// Which coordinate field a bad input came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    X,
    Y,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::X => write!(f, "x"),
            Field::Y => write!(f, "y"),
        }
    }
}

/// Errors surfaced by session actions. None of them mutate the point store.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionError {
    /// A coordinate field did not parse as a number.
    InvalidNumber { field: Field, text: String },
    /// Calculation requested with fewer than three points.
    TooFewVertices { got: usize },
    /// The hull routine rejected the point set.
    Hull(HullError),
    /// Writing the chart document failed.
    Render(fmt::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidNumber { field, text } => {
                write!(f, "could not convert {field}-coordinate to a number: {text:?}")
            }
            SessionError::TooFewVertices { .. } => write!(f, "{TOO_FEW_VERTICES}"),
            SessionError::Hull(e) => write!(f, "{e}"),
            SessionError::Render(e) => write!(f, "could not draw chart: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Hull(e) => Some(e),
            SessionError::Render(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HullError> for SessionError {
    fn from(e: HullError) -> Self {
        SessionError::Hull(e)
    }
}

impl From<fmt::Error> for SessionError {
    fn from(e: fmt::Error) -> Self {
        SessionError::Render(e)
    }
}

fn parse_field(field: Field, text: &str) -> Result<f64, SessionError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| SessionError::InvalidNumber {
            field,
            text: text.to_string(),
        })
}

/// Point store plus the text of the last calculation.
#[derive(Clone, Debug, Default)]
pub struct Session {
    points: Vec<Point>,
    result_text: String,
    cfg: GeomCfg,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty session with custom tolerances.
    pub fn with_cfg(cfg: GeomCfg) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    /// Append a point. Duplicates are kept.
    pub fn add(&mut self, x: f64, y: f64) {
        self.points.push(pt(x, y));
        tracing::debug!(x, y, count = self.points.len(), "add");
    }

    /// Parse both fields, then append. On error the store is unchanged.
    pub fn add_text(&mut self, x: &str, y: &str) -> Result<Point, SessionError> {
        let x = parse_field(Field::X, x)?;
        let y = parse_field(Field::Y, y)?;
        self.add(x, y);
        Ok(pt(x, y))
    }

    /// Empty the store and the result text.
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.points.len(), "clear");
        self.points.clear();
        self.result_text.clear();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    /// One `(x, y)` line per stored point, in entry order.
    pub fn listing(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|p| format!("({:?}, {:?})", p.x, p.y))
            .collect()
    }

    /// Hull the store and measure it. The result text tracks the outcome.
    pub fn calculate(&mut self) -> Result<Report, SessionError> {
        let outcome = if self.points.len() < 3 {
            Err(SessionError::TooFewVertices {
                got: self.points.len(),
            })
        } else {
            Report::compute(&self.points, &self.cfg).map_err(SessionError::from)
        };
        match &outcome {
            Ok(report) => {
                self.result_text = report.summary();
                tracing::debug!(points = self.points.len(), hull = report.hull.len(), "calculate");
            }
            Err(e) => {
                self.result_text = e.to_string();
                tracing::debug!(points = self.points.len(), error = %e, "calculate");
            }
        }
        outcome
    }
}
