//! Planar centroid and area of a closed polygon ring.
//!
//! Latitude is treated as `x` and longitude as `y`. The shoelace terms are
//! accumulated over every consecutive vertex pair; because the ring repeats
//! its first vertex at the end, the closing edge is already included.

use trends_geography_models::{Polygon, PolygonCentroid, Position};

/// Computes the centroid and unsigned area of `polygon`.
///
/// Rings with zero signed area (collapsed or duplicate-point rings) have no
/// defined centroid; for those the first vertex is returned as the centroid
/// and the area is reported as `0.0`.
#[must_use]
#[allow(clippy::float_cmp, clippy::suboptimal_flops)]
pub fn centroid_and_area(polygon: &Polygon) -> PolygonCentroid {
    let mut sum_area = 0.0;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;

    for edge in polygon.positions().windows(2) {
        let (a, b) = (edge[0], edge[1]);
        let cross = a.latitude * b.longitude - b.latitude * a.longitude;
        sum_area += cross;
        sum_x += (a.latitude + b.latitude) * cross;
        sum_y += (a.longitude + b.longitude) * cross;
    }

    let signed_area = sum_area / 2.0;

    if signed_area == 0.0 {
        log::trace!("Zero-area polygon at {}", polygon.first());
        return PolygonCentroid {
            centroid: polygon.first(),
            area: 0.0,
        };
    }

    PolygonCentroid {
        centroid: Position::new(
            sum_x / (6.0 * signed_area),
            sum_y / (6.0 * signed_area),
        ),
        area: signed_area.abs(),
    }
}
