//! Great-circle distance between positions.

use trends_geography_models::Position;

/// Mean earth radius used for distances, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3963.2;

/// Returns the haversine great-circle distance between two positions, in
/// miles.
#[must_use]
pub fn geo_distance(a: Position, b: Position) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlon / 2.0)
        .sin()
        .powi(2)
        .mul_add(lat1.cos() * lat2.cos(), (dlat / 2.0).sin().powi(2));
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}
