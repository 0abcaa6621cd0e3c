//! Bounding boxes over isochrone polygons.

use geo_types::{coord, Coord, Rect};

use crate::vector::{FeatureCollection, Geometry, Position};

/// Incrementally grown bounding box, starting empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsBuilder {
    extent: Option<(Coord<f64>, Coord<f64>)>,
}

impl BoundsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grow the box to include `c`.
    pub fn extend(&mut self, c: Coord<f64>) {
        self.extent = Some(match self.extent {
            None => (c, c),
            Some((min, max)) => (
                coord! { x: min.x.min(c.x), y: min.y.min(c.y) },
                coord! { x: max.x.max(c.x), y: max.y.max(c.y) },
            ),
        });
    }

    /// Grow the box to include a GeoJSON position. Positions with fewer than
    /// two ordinates are skipped.
    pub fn extend_position(&mut self, pos: &Position) {
        if let [x, y, ..] = pos.as_slice() {
            self.extend(coord! { x: *x, y: *y });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.extent.is_none()
    }

    /// The accumulated box, or `None` if nothing was added.
    pub fn build(self) -> Option<Rect<f64>> {
        self.extent.map(|(min, max)| Rect::new(min, max))
    }
}

/// Bounding box of every Polygon and MultiPolygon position in `fc`.
///
/// Returns `None` for an empty collection or one without polygon geometry.
/// Other geometry types are ignored.
pub fn bounds(fc: &FeatureCollection) -> Option<Rect<f64>> {
    let mut builder = BoundsBuilder::new();

    for feature in &fc.features {
        match &feature.geometry {
            Some(Geometry::Polygon { coordinates }) => {
                coordinates
                    .iter()
                    .flatten()
                    .for_each(|p| builder.extend_position(p));
            }
            Some(Geometry::MultiPolygon { coordinates }) => {
                coordinates
                    .iter()
                    .flatten()
                    .flatten()
                    .for_each(|p| builder.extend_position(p));
            }
            _ => {}
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Feature;

    fn ring(points: &[[f64; 2]]) -> Vec<Position> {
        points.iter().map(|p| p.to_vec()).collect()
    }

    #[test]
    fn empty_collection_has_no_bounds() {
        assert!(bounds(&FeatureCollection::empty()).is_none());
    }

    #[test]
    fn polygon_bounds_cover_its_coordinates() {
        let poly = Geometry::Polygon {
            coordinates: vec![ring(&[
                [-74.02, 40.70],
                [-73.98, 40.70],
                [-73.97, 40.73],
                [-74.01, 40.74],
                [-74.02, 40.70],
            ])],
        };
        let fc = FeatureCollection::new(vec![Feature::new(poly)]);
        let rect = bounds(&fc).unwrap();
        assert_eq!(rect.min(), coord! { x: -74.02, y: 40.70 });
        assert_eq!(rect.max(), coord! { x: -73.97, y: 40.74 });
    }

    #[test]
    fn multipolygon_spans_all_members() {
        let multi = Geometry::MultiPolygon {
            coordinates: vec![
                vec![ring(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]])],
                vec![ring(&[[5.0, 5.0], [6.0, 5.0], [6.0, 7.0], [5.0, 5.0]])],
            ],
        };
        let fc = FeatureCollection::new(vec![Feature::new(multi)]);
        let rect = bounds(&fc).unwrap();
        assert_eq!(rect.min(), coord! { x: 0.0, y: 0.0 });
        assert_eq!(rect.max(), coord! { x: 6.0, y: 7.0 });
    }

    #[test]
    fn line_string_is_ignored() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "LineString", "coordinates": [[100.0, 50.0], [120.0, 60.0]]}},
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "Polygon", "coordinates": [[[1.0, 2.0], [3.0, 2.0], [3.0, 4.0], [1.0, 2.0]]]}}
            ]
        }"#;
        let fc: FeatureCollection = serde_json::from_str(json).unwrap();
        let rect = bounds(&fc).unwrap();
        assert_eq!(rect.min(), coord! { x: 1.0, y: 2.0 });
        assert_eq!(rect.max(), coord! { x: 3.0, y: 4.0 });
    }

    #[test]
    fn only_unsupported_geometry_has_no_bounds() {
        let json = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}},
            {"type": "Feature", "properties": {}, "geometry": null}
        ]}"#;
        let fc: FeatureCollection = serde_json::from_str(json).unwrap();
        assert!(bounds(&fc).is_none());
    }

    #[test]
    fn short_positions_are_skipped() {
        let mut b = BoundsBuilder::new();
        b.extend_position(&vec![1.0]);
        assert!(b.is_empty());
        b.extend_position(&vec![1.0, 2.0, 30.0]);
        assert_eq!(b.build().unwrap().min(), coord! { x: 1.0, y: 2.0 });
    }
}
