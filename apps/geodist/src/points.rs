use std::path::Path;

use serde::Deserialize;

/// One named (lon, lat) point from an input file.
#[derive(Debug, Clone, Deserialize)]
pub struct Point {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum PointsError {
    #[error("could not read {path}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("{path} contains no points")]
    Empty { path: String },
}

/// Loads a JSON array of points. An empty array is an input error; every
/// subcommand needs at least one point on each side.
pub fn load(path: &Path) -> Result<Vec<Point>, PointsError> {
    let display = path.display().to_string();

    let text = std::fs::read_to_string(path).map_err(|source| PointsError::Read {
        path: display.clone(),
        source,
    })?;

    let points: Vec<Point> =
        serde_json::from_str(&text).map_err(|source| PointsError::Parse {
            path: display.clone(),
            source,
        })?;

    if points.is_empty() {
        return Err(PointsError::Empty { path: display });
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn parses_a_point_array() {
        let points: Vec<Point> = serde_json::from_str(
            r#"[{"name": "Norman Hall", "lon": -82.3379, "lat": 29.6472}]"#,
        )
        .unwrap();

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].name, "Norman Hall");
        assert_eq!(points[0].lon, -82.3379);
        assert_eq!(points[0].lat, 29.6472);
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let result: Result<Vec<Point>, _> =
            serde_json::from_str(r#"[{"name": "bad", "lon": "x", "lat": 0.0}]"#);

        assert!(result.is_err());
    }
}
