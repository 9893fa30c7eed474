//! Nearest-stop lookup.

use crate::domain::StopCoordinate;

/// The stop closest to a query point.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestStop {
    /// Exact stop name from the coordinate sheet.
    pub name: String,

    /// Great-circle distance from the query point, in kilometres.
    pub distance_km: f64,
}

/// Find the stop closest to a point.
///
/// Scans every stop once. On equal distances the stop that comes first in
/// the index wins. A distance that is NaN (from a NaN query coordinate)
/// never wins, so a query with no comparable distance finds nothing.
///
/// Returns `None` if there are no stops.
pub fn nearest_stop(
    stops: &[StopCoordinate],
    latitude: f64,
    longitude: f64,
) -> Option<(&StopCoordinate, f64)> {
    let mut best: Option<(&StopCoordinate, f64)> = None;

    for stop in stops {
        let distance = stop.distance_km(latitude, longitude);
        if distance.is_nan() {
            continue;
        }

        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((stop, distance)),
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(name: &str, lat: f64, lon: f64) -> StopCoordinate {
        StopCoordinate::new(name, lat, lon).unwrap()
    }

    #[test]
    fn empty_index_finds_nothing() {
        assert!(nearest_stop(&[], 37.5, 127.0).is_none());
    }

    #[test]
    fn picks_closest() {
        let stops = vec![
            stop("Market", 37.60, 127.10),
            stop("Central", 37.50, 127.00),
            stop("Harbour", 35.10, 129.04),
        ];

        let (found, distance) = nearest_stop(&stops, 37.51, 127.01).unwrap();
        assert_eq!(found.name, "Central");
        assert!(distance > 0.0 && distance < 2.0, "got {distance}");
    }

    #[test]
    fn exact_position_has_zero_distance() {
        let stops = vec![stop("Central", 37.50, 127.00)];
        let (_, distance) = nearest_stop(&stops, 37.50, 127.00).unwrap();
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn first_seen_wins_ties() {
        // Mirror images across the query meridian are equidistant
        let stops = vec![
            stop("West", 37.50, 126.50),
            stop("East", 37.50, 127.50),
        ];

        let (found, _) = nearest_stop(&stops, 37.50, 127.00).unwrap();
        assert_eq!(found.name, "West");

        let reversed: Vec<_> = stops.into_iter().rev().collect();
        let (found, _) = nearest_stop(&reversed, 37.50, 127.00).unwrap();
        assert_eq!(found.name, "East");
    }

    #[test]
    fn duplicate_positions_keep_first() {
        let stops = vec![
            stop("Central (north side)", 37.50, 127.00),
            stop("Central (south side)", 37.50, 127.00),
        ];

        let (found, _) = nearest_stop(&stops, 37.49, 127.00).unwrap();
        assert_eq!(found.name, "Central (north side)");
    }

    #[test]
    fn nan_query_finds_nothing() {
        let stops = vec![stop("Central", 37.50, 127.00)];
        assert!(nearest_stop(&stops, f64::NAN, 127.0).is_none());
    }
}
