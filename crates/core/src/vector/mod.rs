//! GeoJSON feature collections as returned by the isochrone API.
//!
//! Only the geometry types an isochrone can contain are modelled. Anything
//! else is kept verbatim as [`Geometry::Other`] so collections re-serialize
//! unchanged, and feature properties are carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::{Error, Result};

/// A GeoJSON position: `[lng, lat]` with optional extra ordinates.
pub type Position = Vec<f64>;

/// Feature geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum Geometry {
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    /// Any other GeoJSON geometry, as received.
    Other(Value),
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Areal {
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
}

impl TryFrom<Value> for Geometry {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value.get("type").and_then(Value::as_str) {
            Some("Polygon" | "MultiPolygon") => Ok(match serde_json::from_value(value)? {
                Areal::Polygon { coordinates } => Self::Polygon { coordinates },
                Areal::MultiPolygon { coordinates } => Self::MultiPolygon { coordinates },
            }),
            _ => Ok(Self::Other(value)),
        }
    }
}

impl From<Geometry> for Value {
    fn from(geometry: Geometry) -> Self {
        match geometry {
            Geometry::Polygon { coordinates } => {
                json!({"type": "Polygon", "coordinates": coordinates})
            }
            Geometry::MultiPolygon { coordinates } => {
                json!({"type": "MultiPolygon", "coordinates": coordinates})
            }
            Geometry::Other(value) => value,
        }
    }
}

/// A geographic feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub type_: String,

    pub geometry: Option<Geometry>,

    #[serde(default)]
    pub properties: Map<String, Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

fn feature_type() -> String {
    "Feature".to_string()
}

impl Feature {
    /// Create a new feature with geometry and no properties
    pub fn new(geometry: Geometry) -> Self {
        Self {
            type_: feature_type(),
            geometry: Some(geometry),
            properties: Map::new(),
            id: None,
        }
    }

    /// Set a property
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Get a property
    pub fn get_property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

/// Collection of features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub type_: String,

    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::empty()
    }
}

impl FeatureCollection {
    pub const TYPE: &'static str = "FeatureCollection";

    /// The empty collection used to clear a map source.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            type_: Self::TYPE.to_string(),
            features,
        }
    }

    /// Parse a response body, rejecting JSON that is not a FeatureCollection.
    pub fn from_json_str(body: &str) -> Result<Self> {
        let fc: Self = serde_json::from_str(body)?;
        if fc.type_ != Self::TYPE {
            return Err(Error::InvalidParameter {
                name: "type",
                value: fc.type_,
                reason: "expected a GeoJSON FeatureCollection".into(),
            });
        }
        Ok(fc)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAPBOX_BODY: &str = r##"{
        "features": [{
            "properties": {"fill-opacity": 0.33, "fill": "#bf4040", "contour": 20, "metric": "time"},
            "geometry": {"coordinates": [[[-74.01, 40.71], [-74.00, 40.70], [-73.99, 40.72], [-74.01, 40.71]]], "type": "Polygon"},
            "type": "Feature"
        }],
        "type": "FeatureCollection"
    }"##;

    #[test]
    fn parses_isochrone_response() {
        let fc = FeatureCollection::from_json_str(MAPBOX_BODY).unwrap();
        assert_eq!(fc.len(), 1);
        let feature = &fc.features[0];
        assert_eq!(feature.get_property("contour"), Some(&Value::from(20)));
        match &feature.geometry {
            Some(Geometry::Polygon { coordinates }) => assert_eq!(coordinates[0].len(), 4),
            other => panic!("unexpected geometry: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_collection() {
        let err = FeatureCollection::from_json_str(r#"{"type": "Feature", "features": []}"#);
        assert!(err.is_err());
        assert!(FeatureCollection::from_json_str("not json").is_err());
    }

    #[test]
    fn unknown_geometry_is_not_an_error() {
        let json = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}}
        ]}"#;
        let fc = FeatureCollection::from_json_str(json).unwrap();
        assert!(matches!(fc.features[0].geometry, Some(Geometry::Other(_))));
        assert!(fc.features[0].properties.is_empty());
    }

    #[test]
    fn unknown_geometry_survives_reserialization() {
        let json = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"contour": 10},
             "geometry": {"type": "LineString", "coordinates": [[0.5, 1.0], [2.0, 3.5]]}},
            {"type": "Feature", "properties": {},
             "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]]}}
        ]}"#;
        let fc = FeatureCollection::from_json_str(json).unwrap();
        let out = serde_json::to_value(&fc).unwrap();
        let input: Value = serde_json::from_str(json).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn malformed_polygon_is_an_error() {
        let json = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": "nope"}}
        ]}"#;
        assert!(FeatureCollection::from_json_str(json).is_err());
    }

    #[test]
    fn empty_collection_serializes_like_a_cleared_source() {
        let v = serde_json::to_value(FeatureCollection::empty()).unwrap();
        assert_eq!(v, serde_json::json!({"type": "FeatureCollection", "features": []}));
    }
}
