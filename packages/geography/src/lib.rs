#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geometry for the tweet trends map.
//!
//! Computes polygon centroids and areas, derives an area-weighted center
//! for each region, and classifies points by their nearest region center
//! using great-circle distance. Region polygons are loaded from `GeoJSON`
//! or the legacy `states.json` shape layout.

pub mod center;
pub mod classify;
pub mod distance;
pub mod load;
pub mod polygon;

pub use center::{region_center, region_centers, weighted_center};
pub use classify::{closest_region, regions_by_distance};
pub use distance::geo_distance;
pub use polygon::centroid_and_area;

use thiserror::Error;
use trends_geography_models::PolygonError;

/// Errors that can occur during geography operations.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Nearest-region classification needs at least one region center.
    #[error("No region centers to classify against")]
    NoRegions,

    /// The polygons have zero total area, so no weighted center exists.
    #[error("Polygons have zero total area")]
    ZeroArea,

    /// A named region has zero total area.
    #[error("Region {name} has zero total area")]
    DegenerateRegion {
        /// Region name.
        name: String,
    },

    /// A region name was requested that is not in the region table.
    #[error("Unknown region: {name}")]
    UnknownRegion {
        /// The requested region name.
        name: String,
    },

    /// A ring in a region file is not a valid polygon.
    #[error("Invalid polygon in region {region}: {source}")]
    Polygon {
        /// Region the polygon belongs to.
        region: String,
        /// Underlying validation failure.
        source: PolygonError,
    },

    /// I/O error reading a region file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `GeoJSON` parsing or conversion failed.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] Box<geojson::Error>),

    /// Region file content could not be interpreted.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}

impl From<geojson::Error> for GeoError {
    fn from(e: geojson::Error) -> Self {
        Self::GeoJson(Box::new(e))
    }
}
