//! Tabular inputs (CSV or Parquet) and JSON outputs.

use anyhow::{Context, Result};
use circuit_collide::layout::points_from_xy;
use circuit_collide::{Point2, Segment};
use polars::prelude::*;
use serde::Serialize;
use std::path::Path;

fn read_frame(path: &Path) -> Result<DataFrame> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        _ => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()?,
    };
    lf.collect()
        .with_context(|| format!("reading {}", path.display()))
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .collect::<Option<Vec<f64>>>()
        .with_context(|| format!("null value in column `{name}`"))
}

/// Points from columns `x, y`.
pub fn read_points(path: &Path) -> Result<Vec<Point2>> {
    let df = read_frame(path)?;
    tracing::info!(rows = df.height(), path = %path.display(), "read_points");
    let x = column_f64(&df, "x")?;
    let y = column_f64(&df, "y")?;
    Ok(points_from_xy(&x, &y)?)
}

/// Segments from columns `x1, y1, x2, y2`.
pub fn read_segments(path: &Path) -> Result<Vec<Segment>> {
    let df = read_frame(path)?;
    tracing::info!(rows = df.height(), path = %path.display(), "read_segments");
    let cols = ["x1", "y1", "x2", "y2"]
        .into_iter()
        .map(|c| column_f64(&df, c))
        .collect::<Result<Vec<_>>>()?;
    Ok((0..df.height())
        .map(|i| Segment::from_coords(cols[0][i], cols[1][i], cols[2][i], cols[3][i]))
        .collect())
}

/// Pretty JSON at `out`, creating parent directories.
pub fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_points_and_segments_from_csv() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("pts.csv");
        std::fs::write(&pts, "x,y\n0,0\n5.5,-1\n").unwrap();
        assert_eq!(
            read_points(&pts).unwrap(),
            vec![Point2::new(0.0, 0.0), Point2::new(5.5, -1.0)]
        );

        let segs = dir.path().join("segs.csv");
        std::fs::write(&segs, "x1,y1,x2,y2\n-1,5,1,5\n").unwrap();
        assert_eq!(
            read_segments(&segs).unwrap(),
            vec![Segment::from_coords(-1.0, 5.0, 1.0, 5.0)]
        );
    }

    #[test]
    fn missing_column_is_named() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("pts.csv");
        std::fs::write(&pts, "x,z\n0,0\n").unwrap();
        let err = read_points(&pts).unwrap_err();
        assert!(format!("{err:#}").contains("`y`"));
    }

    #[test]
    fn write_json_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/out.json");
        write_json(&out, &vec![1, 2]).unwrap();
        let back: Vec<i32> = serde_json::from_slice(&std::fs::read(out).unwrap()).unwrap();
        assert_eq!(back, vec![1, 2]);
    }
}
