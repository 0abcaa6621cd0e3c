//! In-memory surface that records the resulting map and page state.

use std::collections::{BTreeMap, HashMap};

use geo_types::Rect;
use isomap_core::{FeatureCollection, LngLat};
use tracing::warn;

use super::MapSurface;
use crate::bootstrap::{Control, ControlPosition, FitOptions, MapOptions};
use crate::layers::{LayerKind, LayerSpec, Paint};
use crate::state::{Element, TriggerState};

/// A layer as currently shown.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLayer {
    pub kind: LayerKind,
    pub source: String,
    pub visible: bool,
    /// Paint properties keyed by style-spec name.
    pub paint: BTreeMap<&'static str, Paint>,
}

impl RecordedLayer {
    pub fn paint(&self, property: &str) -> Option<&Paint> {
        self.paint.get(property)
    }
}

/// Headless [`MapSurface`]: keeps the latest map and page state in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub map: Option<MapOptions>,
    pub controls: Vec<(Control, ControlPosition)>,
    pub sources: BTreeMap<String, FeatureCollection>,
    pub layers: BTreeMap<String, RecordedLayer>,
    pub camera: Option<Rect<f64>>,
    pub marker: Option<LngLat>,
    pub texts: HashMap<Element, String>,
    pub legend_visible: bool,
    pub trigger: TriggerState,
    /// Every trigger state set, oldest first.
    pub trigger_history: Vec<TriggerState>,
    pub alerts: Vec<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self, id: &str) -> Option<&FeatureCollection> {
        self.sources.get(id)
    }

    pub fn layer(&self, id: &str) -> Option<&RecordedLayer> {
        self.layers.get(id)
    }

    pub fn is_visible(&self, layer: &str) -> bool {
        self.layers.get(layer).is_some_and(|l| l.visible)
    }

    pub fn text(&self, element: Element) -> Option<&str> {
        self.texts.get(&element).map(String::as_str)
    }

    /// Sources that currently hold at least one feature.
    pub fn populated_sources(&self) -> impl Iterator<Item = (&str, &FeatureCollection)> {
        self.sources
            .iter()
            .filter(|(_, fc)| !fc.is_empty())
            .map(|(id, fc)| (id.as_str(), fc))
    }
}

impl MapSurface for RecordingSurface {
    fn create_map(&mut self, options: &MapOptions) {
        self.map = Some(options.clone());
        self.camera = None;
    }

    fn add_control(&mut self, control: &Control, position: ControlPosition) {
        self.controls.push((control.clone(), position));
    }

    fn add_source(&mut self, id: &str, data: FeatureCollection) {
        self.sources.insert(id.to_string(), data);
    }

    fn add_layer(&mut self, spec: &LayerSpec) {
        if !self.sources.contains_key(&spec.source) {
            warn!(layer = %spec.id, source = %spec.source, "layer added for unknown source");
        }
        let paint = spec.paint.iter().map(|p| (p.property(), p.clone())).collect();
        self.layers.insert(
            spec.id.clone(),
            RecordedLayer {
                kind: spec.kind,
                source: spec.source.clone(),
                visible: spec.visible,
                paint,
            },
        );
    }

    fn set_source_data(&mut self, id: &str, data: FeatureCollection) {
        match self.sources.get_mut(id) {
            Some(slot) => *slot = data,
            None => warn!(source = %id, "data set on unknown source"),
        }
    }

    fn set_visibility(&mut self, layer: &str, visible: bool) {
        match self.layers.get_mut(layer) {
            Some(l) => l.visible = visible,
            None => warn!(%layer, "visibility set on unknown layer"),
        }
    }

    fn set_paint(&mut self, layer: &str, paint: &Paint) {
        match self.layers.get_mut(layer) {
            Some(l) => {
                l.paint.insert(paint.property(), paint.clone());
            }
            None => warn!(%layer, "paint set on unknown layer"),
        }
    }

    fn fit_bounds(&mut self, bounds: Rect<f64>, _options: &FitOptions) {
        self.camera = Some(bounds);
    }

    fn place_marker(&mut self, point: LngLat) {
        self.marker = Some(point);
    }

    fn set_text(&mut self, element: Element, text: &str) {
        self.texts.insert(element, text.to_string());
    }

    fn show_legend(&mut self, visible: bool) {
        self.legend_visible = visible;
    }

    fn set_trigger(&mut self, trigger: &TriggerState) {
        self.trigger = trigger.clone();
        self.trigger_history.push(trigger.clone());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
