//! Map creation: style, initial camera and controls.

use isomap_core::LngLat;
use serde::{Deserialize, Serialize};

use crate::state::Effect;

/// Initial map configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    /// Element the map renders into.
    pub container: String,
    pub style: String,
    pub center: LngLat,
    pub zoom: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            container: "map".to_string(),
            style: "mapbox://styles/mapbox/streets-v12".to_string(),
            center: LngLat {
                lng: -74.0060,
                lat: 40.7128,
            },
            zoom: 12.0,
        }
    }
}

/// Screen corner a control is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Built-in map controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Control {
    Navigation,
    Geolocate {
        high_accuracy: bool,
        track_user: bool,
    },
}

/// How the camera fits a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitOptions {
    /// Pixels kept free around the box.
    pub padding: u32,
    pub max_zoom: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding: 50,
            max_zoom: 15.0,
        }
    }
}

/// Effects that create the map and dock its controls.
pub fn bootstrap_effects(options: &MapOptions) -> Vec<Effect> {
    vec![
        Effect::CreateMap(options.clone()),
        Effect::AddControl {
            control: Control::Navigation,
            position: ControlPosition::TopRight,
        },
        Effect::AddControl {
            control: Control::Geolocate {
                high_accuracy: true,
                track_user: true,
            },
            position: ControlPosition::TopRight,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_map_centers_on_new_york() {
        let opts = MapOptions::default();
        assert_eq!(opts.center.to_array(), [-74.0060, 40.7128]);
        assert_eq!(opts.zoom, 12.0);
        assert_eq!(opts.style, "mapbox://styles/mapbox/streets-v12");
    }

    #[test]
    fn bootstrap_creates_map_then_controls() {
        let effects = bootstrap_effects(&MapOptions::default());
        assert!(matches!(effects[0], Effect::CreateMap(_)));
        let controls = effects
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    Effect::AddControl {
                        position: ControlPosition::TopRight,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(controls, 2);
    }
}
