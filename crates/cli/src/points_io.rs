//! CSV point files: header row, numeric `x` and `y` columns.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use pairhull::Point;
use polars::prelude::*;

/// Read all rows of `path` as points, in file order (row k is point k).
///
/// Types are inferred from every row, so integer rows followed by a late
/// float row still read as Float64; integer-only columns are cast. Missing or
/// non-finite coordinates are rejected with their row index.
pub fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(None)
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                points.push(Point::new(x, y))
            }
            _ => bail!("row {row}: missing or non-finite coordinate in {}", path.display()),
        }
    }
    tracing::debug!(n = points.len(), path = %path.display(), "points_loaded");
    Ok(points)
}

/// Write points as `x,y` CSV with a header row.
pub fn write_points_csv(path: &Path, points: &[Point]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_integer_and_float_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0,0\n1,0\n1.5,2\n0,1\n").unwrap();
        let pts = read_points_csv(&path).unwrap();
        assert_eq!(
            pts,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.5, 2.0),
                Point::new(0.0, 1.0)
            ]
        );
    }

    #[test]
    fn late_float_row_after_many_integer_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        let mut body = String::from("x,y\n");
        for k in 0..150 {
            body.push_str(&format!("{k},{}\n", k % 7));
        }
        body.push_str("0.5,2.25\n");
        fs::write(&path, body).unwrap();
        let pts = read_points_csv(&path).unwrap();
        assert_eq!(pts.len(), 151);
        assert_eq!(pts[149], Point::new(149.0, 2.0));
        assert_eq!(pts[150], Point::new(0.5, 2.25));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "label,y,x\na,2,1\nb,4,3\n").unwrap();
        let pts = read_points_csv(&path).unwrap();
        assert_eq!(pts, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn missing_coordinate_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0,0\n1,\n2,2\n").unwrap();
        let err = read_points_csv(&path).unwrap_err();
        assert!(err.to_string().contains("row 1"), "{err}");
    }

    #[test]
    fn sampled_cloud_survives_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/cloud.csv");
        let pts = vec![Point::new(0.25, -1.5), Point::new(3.0, 4.0)];
        write_points_csv(&path, &pts).unwrap();
        assert_eq!(read_points_csv(&path).unwrap(), pts);
    }
}
