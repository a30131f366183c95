//! Nearest-region classification.
//!
//! Region centers are scanned in slice order. When two centers are the
//! same distance away, the one that appears first wins. Only a strictly
//! smaller distance replaces the current best, so an undefined (NaN)
//! distance never wins.

use trends_geography_models::{Position, RegionCenter};

use crate::GeoError;
use crate::distance::geo_distance;

/// Returns the name of the region whose center is closest to `point`.
///
/// # Errors
///
/// Returns [`GeoError::NoRegions`] if `centers` is empty.
pub fn closest_region(point: Position, centers: &[RegionCenter]) -> Result<&str, GeoError> {
    let mut best: Option<(&RegionCenter, f64)> = None;

    for entry in centers {
        let distance = geo_distance(point, entry.center);
        match best {
            Some((_, min)) if distance < min => best = Some((entry, distance)),
            Some(_) => {}
            None => best = Some((entry, distance)),
        }
    }

    best.map(|(entry, _)| entry.name.as_str())
        .ok_or(GeoError::NoRegions)
}

/// Returns up to `n` region centers ordered by distance from `origin`,
/// paired with that distance in miles. Equal distances keep slice order.
#[must_use]
pub fn regions_by_distance(
    origin: Position,
    centers: &[RegionCenter],
    n: usize,
) -> Vec<(&RegionCenter, f64)> {
    let mut ranked: Vec<(&RegionCenter, f64)> = centers
        .iter()
        .map(|entry| (entry, geo_distance(origin, entry.center)))
        .collect();

    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(name: &str, latitude: f64, longitude: f64) -> RegionCenter {
        RegionCenter {
            name: name.to_string(),
            center: Position::new(latitude, longitude),
        }
    }

    #[test]
    fn picks_nearest_center() {
        let centers = [center("NY", 42.9, -75.5), center("CA", 37.25, -119.61)];
        assert_eq!(
            closest_region(Position::new(38.0, -122.0), &centers).unwrap(),
            "CA"
        );
        assert_eq!(
            closest_region(Position::new(41.0, -74.0), &centers).unwrap(),
            "NY"
        );
    }

    #[test]
    fn undefined_distance_keeps_first_center() {
        let centers = [center("FIRST", 10.0, 10.0), center("LAST", 0.0, 0.0)];
        assert_eq!(
            closest_region(Position::new(f64::NAN, 0.0), &centers).unwrap(),
            "FIRST"
        );
    }

    #[test]
    fn ties_go_to_first_center() {
        let centers = [center("EAST", 0.0, 1.0), center("WEST", 0.0, -1.0)];
        let origin = Position::new(0.0, 0.0);
        assert_eq!(closest_region(origin, &centers).unwrap(), "EAST");

        let reversed = [center("WEST", 0.0, -1.0), center("EAST", 0.0, 1.0)];
        assert_eq!(closest_region(origin, &reversed).unwrap(), "WEST");
    }

    #[test]
    fn duplicate_centers_keep_first() {
        let centers = [center("FIRST", 10.0, 10.0), center("SECOND", 10.0, 10.0)];
        assert_eq!(
            closest_region(Position::new(10.0, 10.0), &centers).unwrap(),
            "FIRST"
        );
    }

    #[test]
    fn empty_centers_is_an_error() {
        assert!(matches!(
            closest_region(Position::new(0.0, 0.0), &[]),
            Err(GeoError::NoRegions)
        ));
    }

    #[test]
    fn ranks_by_distance_and_truncates() {
        let centers = [
            center("FAR", 0.0, 30.0),
            center("NEAR", 0.0, 1.0),
            center("SELF", 0.0, 0.0),
            center("MID", 0.0, 10.0),
        ];
        let ranked = regions_by_distance(Position::new(0.0, 0.0), &centers, 3);
        let names: Vec<&str> = ranked.iter().map(|(c, _)| c.name.as_str()).collect();
        assert_eq!(names, ["SELF", "NEAR", "MID"]);
        assert!(ranked[0].1.abs() < f64::EPSILON);
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        let centers = [center("B", 0.0, -1.0), center("A", 0.0, 1.0)];
        let ranked = regions_by_distance(Position::new(0.0, 0.0), &centers, 10);
        let names: Vec<&str> = ranked.iter().map(|(c, _)| c.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }
}
