//! Area-weighted region centers.
//!
//! A region's center is the average of its polygons' centroids, weighted by
//! each polygon's area, so large landmasses dominate small islands.

use trends_geography_models::{Polygon, PolygonCentroid, Position, Region, RegionCenter};

use crate::GeoError;
use crate::polygon::centroid_and_area;

/// Averages polygon centroids weighted by their areas.
///
/// # Errors
///
/// Returns [`GeoError::ZeroArea`] if the parts have zero total area
/// (including an empty slice).
#[allow(clippy::float_cmp)]
pub fn weighted_center(parts: &[PolygonCentroid]) -> Result<Position, GeoError> {
    let mut total_area = 0.0;
    let mut latitude = 0.0;
    let mut longitude = 0.0;

    for part in parts {
        total_area += part.area;
        latitude += part.centroid.latitude * part.area;
        longitude += part.centroid.longitude * part.area;
    }

    if total_area == 0.0 {
        return Err(GeoError::ZeroArea);
    }

    Ok(Position::new(latitude / total_area, longitude / total_area))
}

/// Computes the area-weighted center of a set of polygons.
///
/// # Errors
///
/// Returns [`GeoError::ZeroArea`] if every polygon is degenerate.
pub fn region_center(polygons: &[Polygon]) -> Result<Position, GeoError> {
    let parts: Vec<PolygonCentroid> = polygons.iter().map(centroid_and_area).collect();
    weighted_center(&parts)
}

/// Computes the center of every region, preserving the region order.
///
/// # Errors
///
/// Returns [`GeoError::DegenerateRegion`] naming the first region whose
/// polygons have zero total area.
pub fn region_centers(regions: &[Region]) -> Result<Vec<RegionCenter>, GeoError> {
    let centers = regions
        .iter()
        .map(|region| {
            let center = region_center(&region.polygons).map_err(|_| {
                GeoError::DegenerateRegion {
                    name: region.name.clone(),
                }
            })?;
            Ok(RegionCenter {
                name: region.name.clone(),
                center,
            })
        })
        .collect::<Result<Vec<_>, GeoError>>()?;

    log::debug!("Computed centers for {} regions", centers.len());

    Ok(centers)
}
