use serde::Serialize;

use crate::haversine;
use crate::points::Point;

/// Distances from one `from` point to every `to` point, in input order.
#[derive(Debug, Serialize)]
pub struct MatrixRow {
    pub from: String,
    pub distances: Vec<MatrixEntry>,
}

#[derive(Debug, Serialize)]
pub struct MatrixEntry {
    pub to: String,
    pub meters: f64,
}

/// Nearest `to` point for one `from` point.
#[derive(Debug, Serialize)]
pub struct NearestMatch {
    pub from: String,
    pub nearest: String,
    pub meters: f64,
}

pub fn distance_matrix(from: &[Point], to: &[Point]) -> Vec<MatrixRow> {
    from.iter()
        .map(|origin| MatrixRow {
            from: origin.name.clone(),
            distances: to
                .iter()
                .map(|target| MatrixEntry {
                    to: target.name.clone(),
                    meters: haversine::distance_m(origin.lon, origin.lat, target.lon, target.lat),
                })
                .collect(),
        })
        .collect()
}

/// Ties resolve to the earliest `to` point. Returns `None` when `to` is
/// empty; callers validate input before getting here.
pub fn nearest_matches(from: &[Point], to: &[Point]) -> Option<Vec<NearestMatch>> {
    if to.is_empty() {
        return None;
    }

    Some(
        from.iter()
            .map(|origin| {
                let mut nearest = &to[0];
                let mut best =
                    haversine::distance_m(origin.lon, origin.lat, to[0].lon, to[0].lat);
                for target in &to[1..] {
                    let meters =
                        haversine::distance_m(origin.lon, origin.lat, target.lon, target.lat);
                    if meters < best {
                        best = meters;
                        nearest = target;
                    }
                }
                NearestMatch {
                    from: origin.name.clone(),
                    nearest: nearest.name.clone(),
                    meters: best,
                }
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::{distance_matrix, nearest_matches};
    use crate::points::Point;

    fn point(name: &str, lon: f64, lat: f64) -> Point {
        Point {
            name: name.to_string(),
            lon,
            lat,
        }
    }

    #[test]
    fn matrix_preserves_input_order() {
        let from = [point("a", 0.0, 0.0), point("b", 1.0, 0.0)];
        let to = [point("x", 0.0, 0.0), point("y", 2.0, 0.0)];

        let rows = distance_matrix(&from, &to);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].from, "a");
        assert_eq!(rows[0].distances[0].to, "x");
        assert_eq!(rows[0].distances[0].meters, 0.0);
        assert_eq!(rows[1].from, "b");
        assert_eq!(rows[1].distances[1].to, "y");
        assert!(rows[1].distances[1].meters > 0.0);
    }

    #[test]
    fn nearest_picks_the_closest_point() {
        let from = [point("origin", 0.0, 0.0)];
        let to = [point("far", 3.0, 0.0), point("near", 0.1, 0.0)];

        let matches = nearest_matches(&from, &to).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].from, "origin");
        assert_eq!(matches[0].nearest, "near");
    }

    #[test]
    fn nearest_ties_resolve_to_the_first_candidate() {
        let from = [point("origin", 0.0, 0.0)];
        let to = [point("east", 1.0, 0.0), point("west", -1.0, 0.0)];

        let matches = nearest_matches(&from, &to).unwrap();

        assert_eq!(matches[0].nearest, "east");
    }

    #[test]
    fn nearest_with_no_candidates_is_none() {
        let from = [point("origin", 0.0, 0.0)];

        assert!(nearest_matches(&from, &[]).is_none());
    }
}
