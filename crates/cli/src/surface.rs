//! Terminal-backed map surface.

use geo_types::Rect;
use indicatif::ProgressBar;
use isomap_app::bootstrap::{Control, ControlPosition};
use isomap_app::layers::LayerSpec;
use isomap_app::{
    Element, FitOptions, MapOptions, MapSurface, Paint, RecordingSurface, TriggerState,
};
use isomap_core::{FeatureCollection, LngLat};
use tracing::warn;

/// Records map state like [`RecordingSurface`] and mirrors the trigger
/// label onto a spinner.
pub struct TerminalSurface {
    recorded: RecordingSurface,
    spinner: ProgressBar,
}

impl TerminalSurface {
    pub fn new(spinner: ProgressBar) -> Self {
        Self {
            recorded: RecordingSurface::new(),
            spinner,
        }
    }

    pub fn recorded(&self) -> &RecordingSurface {
        &self.recorded
    }

    pub fn finish(self) -> RecordingSurface {
        self.spinner.finish_and_clear();
        self.recorded
    }
}

impl MapSurface for TerminalSurface {
    fn create_map(&mut self, options: &MapOptions) {
        self.recorded.create_map(options);
    }

    fn add_control(&mut self, control: &Control, position: ControlPosition) {
        self.recorded.add_control(control, position);
    }

    fn add_source(&mut self, id: &str, data: FeatureCollection) {
        self.recorded.add_source(id, data);
    }

    fn add_layer(&mut self, spec: &LayerSpec) {
        self.recorded.add_layer(spec);
    }

    fn set_source_data(&mut self, id: &str, data: FeatureCollection) {
        self.recorded.set_source_data(id, data);
    }

    fn set_visibility(&mut self, layer: &str, visible: bool) {
        self.recorded.set_visibility(layer, visible);
    }

    fn set_paint(&mut self, layer: &str, paint: &Paint) {
        self.recorded.set_paint(layer, paint);
    }

    fn fit_bounds(&mut self, bounds: Rect<f64>, options: &FitOptions) {
        self.recorded.fit_bounds(bounds, options);
    }

    fn place_marker(&mut self, point: LngLat) {
        self.recorded.place_marker(point);
    }

    fn set_text(&mut self, element: Element, text: &str) {
        self.recorded.set_text(element, text);
    }

    fn show_legend(&mut self, visible: bool) {
        self.recorded.show_legend(visible);
    }

    fn set_trigger(&mut self, trigger: &TriggerState) {
        if !trigger.is_idle() {
            self.spinner.set_message(trigger.label.clone());
        }
        self.recorded.set_trigger(trigger);
    }

    fn alert(&mut self, message: &str) {
        self.spinner.suspend(|| warn!("{message}"));
        self.recorded.alert(message);
    }
}
