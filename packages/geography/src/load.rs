//! Region polygon loading.
//!
//! Two layouts are accepted:
//!
//! * A `GeoJSON` `FeatureCollection` whose features carry a `name` property
//!   and `Polygon` / `MultiPolygon` geometry. Features sharing a name are
//!   merged into one region, in first-seen order.
//! * The legacy `states.json` layout: an object mapping each region name
//!   to a list of shapes, where a shape is either a bare ring of
//!   `[lon, lat]` pairs or a single-ring wrapper around one. Regions keep
//!   the order they appear in the file.
//!
//! Both layouts store coordinates as `[lon, lat]`; they are flipped into
//! [`Position`]s here. Only exterior rings are kept.

use std::path::Path;

use geojson::GeoJson;
use serde::Deserialize;
use trends_geography_models::{Polygon, Position, Region};

use crate::GeoError;

/// Loads regions from a `GeoJSON` or legacy shape file.
///
/// # Errors
///
/// Returns [`GeoError`] if the file cannot be read or parsed, or if a ring
/// is not a valid polygon.
pub fn load_regions(path: &Path) -> Result<Vec<Region>, GeoError> {
    let contents = std::fs::read_to_string(path)?;
    let regions = parse_regions(&contents)?;
    log::info!("Loaded {} regions from {}", regions.len(), path.display());
    Ok(regions)
}

/// Parses region polygons, detecting the layout from the document shape.
///
/// # Errors
///
/// Returns [`GeoError`] if the document matches neither layout.
pub fn parse_regions(contents: &str) -> Result<Vec<Region>, GeoError> {
    let value: serde_json::Value = serde_json::from_str(contents)?;
    if value.get("type").is_some() {
        parse_geojson_regions(contents)
    } else {
        parse_legacy_regions(value)
    }
}

/// Parses a `GeoJSON` `FeatureCollection` into regions.
///
/// Features without a name or without polygonal geometry are skipped with
/// a warning.
///
/// # Errors
///
/// Returns [`GeoError`] if the document is not a `FeatureCollection` or a
/// geometry cannot be converted.
pub fn parse_geojson_regions(contents: &str) -> Result<Vec<Region>, GeoError> {
    let GeoJson::FeatureCollection(collection) = contents.parse::<GeoJson>()? else {
        return Err(GeoError::Conversion {
            message: "expected a GeoJSON FeatureCollection".to_string(),
        });
    };

    let mut regions: Vec<Region> = Vec::new();

    for (index, feature) in collection.features.into_iter().enumerate() {
        let Some(name) = feature
            .property("name")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
        else {
            log::warn!("Skipping feature {index}: missing name property");
            continue;
        };

        let Some(geometry) = feature.geometry else {
            log::warn!("Skipping feature {name}: no geometry");
            continue;
        };

        let polygons = match geo::Geometry::<f64>::try_from(geometry)? {
            geo::Geometry::Polygon(p) => vec![p],
            geo::Geometry::MultiPolygon(mp) => mp.0,
            _ => {
                log::warn!("Skipping feature {name}: geometry is not polygonal");
                continue;
            }
        };

        let rings = polygons
            .iter()
            .map(|polygon| {
                let positions = polygon
                    .exterior()
                    .coords()
                    .map(|c| Position::new(c.y, c.x))
                    .collect();
                Polygon::closing(positions).map_err(|source| GeoError::Polygon {
                    region: name.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, GeoError>>()?;

        match regions.iter_mut().find(|r| r.name == name) {
            Some(existing) => existing.polygons.extend(rings),
            None => regions.push(Region {
                name,
                polygons: rings,
            }),
        }
    }

    Ok(regions)
}

/// One entry of a legacy region's shape list.
#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyShape {
    /// A bare ring of `[lon, lat]` pairs.
    Ring(Vec<[f64; 2]>),
    /// A ring wrapped in a single-element list.
    Wrapped(Vec<Vec<[f64; 2]>>),
}

/// Parses the legacy `{ "CA": [shape, ...], ... }` layout, keeping the
/// file's region order.
///
/// # Errors
///
/// Returns [`GeoError`] if the document is not in this layout, a wrapped
/// shape holds more than one ring, or a ring is not a valid polygon.
pub fn parse_legacy_regions(value: serde_json::Value) -> Result<Vec<Region>, GeoError> {
    let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_value(value)?;

    entries
        .into_iter()
        .map(|(name, shapes)| {
            let shapes: Vec<LegacyShape> = serde_json::from_value(shapes)?;
            let polygons = shapes
                .into_iter()
                .map(|shape| {
                    let ring = match shape {
                        LegacyShape::Ring(ring) => ring,
                        LegacyShape::Wrapped(mut rings) => {
                            if rings.len() != 1 {
                                return Err(GeoError::Conversion {
                                    message: format!(
                                        "region {name} has a multi-ring shape ({} rings)",
                                        rings.len()
                                    ),
                                });
                            }
                            rings.remove(0)
                        }
                    };
                    let positions = ring
                        .into_iter()
                        .map(|[lon, lat]| Position::new(lat, lon))
                        .collect();
                    Polygon::closing(positions).map_err(|source| GeoError::Polygon {
                        region: name.clone(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, GeoError>>()?;
            Ok(Region { name, polygons })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_geojson_feature_collection() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "WY" },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[-111.0, 41.0], [-104.0, 41.0], [-104.0, 45.0], [-111.0, 45.0], [-111.0, 41.0]]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": { "name": "HI" },
                    "geometry": {
                        "type": "MultiPolygon",
                        "coordinates": [
                            [[[-156.0, 19.0], [-155.0, 19.0], [-155.0, 20.0], [-156.0, 19.0]]],
                            [[[-158.3, 21.2], [-157.6, 21.2], [-157.6, 21.7], [-158.3, 21.2]]]
                        ]
                    }
                }
            ]
        }"#;

        let regions = parse_regions(doc).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].name, "WY");
        assert_eq!(regions[0].polygons.len(), 1);
        assert_eq!(regions[0].polygons[0].first(), Position::new(41.0, -111.0));
        assert_eq!(regions[1].name, "HI");
        assert_eq!(regions[1].polygons.len(), 2);
    }

    #[test]
    fn merges_features_with_same_name_and_skips_unnamed() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "MI" },
                    "geometry": { "type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]] }
                },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": { "type": "Polygon", "coordinates": [[[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]] }
                },
                {
                    "type": "Feature",
                    "properties": { "name": "MI" },
                    "geometry": { "type": "Polygon", "coordinates": [[[2.0, 2.0], [3.0, 2.0], [3.0, 3.0], [2.0, 2.0]]] }
                }
            ]
        }"#;

        let regions = parse_geojson_regions(doc).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].polygons.len(), 2);
    }

    #[test]
    fn rejects_bare_geometry() {
        let doc = r#"{ "type": "Point", "coordinates": [1.0, 2.0] }"#;
        assert!(matches!(
            parse_regions(doc),
            Err(GeoError::Conversion { .. })
        ));
    }

    #[test]
    fn parses_legacy_layout() {
        let doc = r#"{
            "RI": [
                [[-71.5, 41.4], [-71.1, 41.4], [-71.1, 42.0], [-71.5, 41.4]],
                [[[-71.6, 41.1], [-71.5, 41.1], [-71.5, 41.2]]]
            ],
            "CT": [
                [[-73.7, 41.0], [-71.8, 41.3], [-71.8, 42.0], [-73.5, 42.0]]
            ]
        }"#;

        let regions = parse_regions(doc).unwrap();
        let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["RI", "CT"]);

        let ri = &regions[0];
        assert_eq!(ri.polygons.len(), 2);
        assert_eq!(ri.polygons[0].first(), Position::new(41.4, -71.5));
        // The open wrapped ring was closed.
        assert_eq!(ri.polygons[1].positions().len(), 4);
        assert_eq!(regions[1].polygons[0].positions().len(), 5);
    }

    #[test]
    fn legacy_layout_keeps_file_order() {
        let doc = r#"{
            "WY": [[[-111.0, 41.0], [-104.0, 41.0], [-104.0, 45.0], [-111.0, 41.0]]],
            "AK": [[[-150.0, 60.0], [-140.0, 60.0], [-140.0, 65.0], [-150.0, 60.0]]],
            "MT": [[[-116.0, 45.0], [-104.0, 45.0], [-104.0, 49.0], [-116.0, 45.0]]]
        }"#;
        let names: Vec<String> = parse_regions(doc)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["WY", "AK", "MT"]);
    }

    #[test]
    fn legacy_multi_ring_shape_is_rejected() {
        let doc = r#"{
            "XX": [
                [
                    [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]],
                    [[0.2, 0.2], [0.4, 0.2], [0.4, 0.4], [0.2, 0.2]]
                ]
            ]
        }"#;
        assert!(matches!(
            parse_regions(doc),
            Err(GeoError::Conversion { .. })
        ));
    }

    #[test]
    fn legacy_empty_ring_is_rejected() {
        let doc = r#"{ "XX": [[]] }"#;
        assert!(matches!(
            parse_regions(doc),
            Err(GeoError::Polygon { .. })
        ));
    }
}
