//! Map coordinate in longitude / latitude order.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A WGS84 coordinate, longitude first as in GeoJSON and the Mapbox APIs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    /// Create a coordinate, rejecting values outside the WGS84 range.
    pub fn new(lng: f64, lat: f64) -> Result<Self> {
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(Error::InvalidCoordinate {
                name: "longitude",
                value: lng,
                reason: "must be within [-180, 180]",
            });
        }
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidCoordinate {
                name: "latitude",
                value: lat,
                reason: "must be within [-90, 90]",
            });
        }
        Ok(Self { lng, lat })
    }

    /// `[lng, lat]`, the GeoJSON position order.
    pub fn to_array(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(p: LngLat) -> Self {
        p.to_array()
    }
}

impl From<LngLat> for geo_types::Coord<f64> {
    fn from(p: LngLat) -> Self {
        geo_types::coord! { x: p.lng, y: p.lat }
    }
}

impl std::fmt::Display for LngLat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lng, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_range() {
        let p = LngLat::new(-74.0060, 40.7128).unwrap();
        assert_eq!(p.to_array(), [-74.0060, 40.7128]);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(LngLat::new(181.0, 0.0).is_err());
        assert!(LngLat::new(0.0, -90.5).is_err());
        assert!(LngLat::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn serializes_as_position() {
        let p = LngLat::new(2.35, 48.85).unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "[2.35,48.85]");
        let back: LngLat = serde_json::from_str("[2.35,48.85]").unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn display_is_url_path_segment() {
        let p = LngLat::new(-122.5, 37.25).unwrap();
        assert_eq!(p.to_string(), "-122.5,37.25");
    }
}
