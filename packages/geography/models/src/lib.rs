#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geographic primitives shared across the tweet trends toolchain.
//!
//! Positions are plain latitude/longitude pairs, polygons are closed rings
//! of positions, and a region (usually a US state) is a named set of
//! polygons. Derived region centers are kept in ordered slices so that
//! every consumer sees regions in the same order.

pub mod states;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A latitude/longitude pair.
///
/// Values outside the usual `[-90, 90]` / `[-180, 180]` ranges are not
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Position {
    /// Creates a position from a latitude and longitude.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Errors produced when constructing a [`Polygon`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    /// A ring needs at least two positions (first and closing vertex).
    #[error("polygon has {count} positions, expected at least 2")]
    TooFewPositions {
        /// Number of positions supplied.
        count: usize,
    },

    /// The first and last positions differ.
    #[error("polygon ring is not closed: first and last positions differ")]
    NotClosed,
}

/// A closed ring of positions. The first and last entries are identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Position>", into = "Vec<Position>")]
pub struct Polygon {
    positions: Vec<Position>,
}

impl Polygon {
    /// Creates a polygon from an already-closed ring.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError`] if the ring has fewer than two positions or
    /// its first and last positions differ.
    pub fn new(positions: Vec<Position>) -> Result<Self, PolygonError> {
        if positions.len() < 2 {
            return Err(PolygonError::TooFewPositions {
                count: positions.len(),
            });
        }
        if positions.first() != positions.last() {
            return Err(PolygonError::NotClosed);
        }
        Ok(Self { positions })
    }

    /// Creates a polygon, appending the first position when the ring is
    /// left open (common in hand-written and legacy shape files).
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::TooFewPositions`] if the closed ring would
    /// still have fewer than two positions.
    pub fn closing(mut positions: Vec<Position>) -> Result<Self, PolygonError> {
        if let Some(&first) = positions.first()
            && positions.last() != Some(&first)
        {
            positions.push(first);
        }
        Self::new(positions)
    }

    /// The ring's positions, first and last included.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// The first vertex of the ring.
    #[must_use]
    pub fn first(&self) -> Position {
        self.positions[0]
    }
}

impl TryFrom<Vec<Position>> for Polygon {
    type Error = PolygonError;

    fn try_from(positions: Vec<Position>) -> Result<Self, Self::Error> {
        Self::new(positions)
    }
}

impl From<Polygon> for Vec<Position> {
    fn from(polygon: Polygon) -> Self {
        polygon.positions
    }
}

/// A named geographic region made of one or more polygons (e.g. a state
/// together with its islands).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Region name, usually a two-letter state abbreviation.
    pub name: String,
    /// Constituent polygons.
    pub polygons: Vec<Polygon>,
}

/// Centroid and unsigned area of a single polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonCentroid {
    /// Area-weighted centroid, or the first vertex for zero-area rings.
    pub centroid: Position,
    /// Unsigned planar area in squared degrees. Zero for degenerate rings.
    pub area: f64,
}

/// The derived center of a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionCenter {
    /// Region name.
    pub name: String,
    /// Area-weighted center of the region's polygons.
    pub center: Position,
}
