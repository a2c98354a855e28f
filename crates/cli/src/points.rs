//! Point list I/O: inline `x,y;x,y` lists and two-column CSV files.

use anyhow::{bail, Context, Result};
use hullcalc::{Point, Session};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Parse `"x,y;x,y;..."`. Empty entries (e.g. a trailing `;`) are skipped.
pub fn parse_inline(list: &str) -> Result<Vec<Point>> {
    let mut session = Session::new();
    for (k, entry) in list.split(';').enumerate() {
        if entry.trim().is_empty() {
            continue;
        }
        let Some((x, y)) = entry.split_once(',') else {
            bail!("point #{} {:?}: expected \"x,y\"", k + 1, entry.trim());
        };
        session
            .add_text(x, y)
            .with_context(|| format!("point #{}", k + 1))?;
    }
    Ok(session.points().to_vec())
}

/// Read points from a CSV with numeric columns `x` and `y`.
pub fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let lf = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?;
    let df = lf
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.f64()?.into_iter().zip(ys.f64()?.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("{}: row {} has a missing coordinate", path.display(), row + 1),
        }
    }
    Ok(out)
}

/// Write points as a CSV with header `x,y`.
pub fn write_csv(path: &Path, points: &[Point]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn inline_points_parse_in_order() {
        let pts = parse_inline("0,0; 1.5,0;1,2;").unwrap();
        assert_eq!(
            pts,
            vec![Point::new(0.0, 0.0), Point::new(1.5, 0.0), Point::new(1.0, 2.0)]
        );
    }

    #[test]
    fn inline_points_reject_garbage() {
        assert!(parse_inline("0,0;1").is_err());
        let err = parse_inline("0,0;a,1").unwrap_err();
        assert!(format!("{err:#}").contains("point #2"));
    }

    #[test]
    fn csv_round_trip_through_polars() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        let pts = vec![Point::new(0.0, 0.0), Point::new(2.5, -1.0), Point::new(1.0, 4.0)];
        write_csv(&path, &pts).unwrap();
        assert_eq!(read_csv(&path).unwrap(), pts);
    }
}
