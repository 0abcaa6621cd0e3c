//! The map and page controls the controller drives.

mod recording;

use geo_types::Rect;
use isomap_core::{FeatureCollection, LngLat};

use crate::bootstrap::{Control, ControlPosition, FitOptions, MapOptions};
use crate::layers::{LayerSpec, Paint};
use crate::state::{Effect, Element, TriggerState};

pub use recording::{RecordedLayer, RecordingSurface};

/// A map plus the handful of page controls around it.
///
/// Implementations forward to a real map SDK and DOM, or record calls in
/// memory like [`RecordingSurface`].
pub trait MapSurface {
    fn create_map(&mut self, options: &MapOptions);
    fn add_control(&mut self, control: &Control, position: ControlPosition);
    fn add_source(&mut self, id: &str, data: FeatureCollection);
    fn add_layer(&mut self, spec: &LayerSpec);
    fn set_source_data(&mut self, id: &str, data: FeatureCollection);
    fn set_visibility(&mut self, layer: &str, visible: bool);
    fn set_paint(&mut self, layer: &str, paint: &Paint);
    fn fit_bounds(&mut self, bounds: Rect<f64>, options: &FitOptions);
    fn place_marker(&mut self, point: LngLat);
    fn set_text(&mut self, element: Element, text: &str);
    fn show_legend(&mut self, visible: bool);
    fn set_trigger(&mut self, trigger: &TriggerState);
    fn alert(&mut self, message: &str);
}

/// Carry out one surface effect. Network effects are returned untouched for
/// the caller to run.
pub fn apply_effect<M: MapSurface + ?Sized>(surface: &mut M, effect: Effect) -> Option<Effect> {
    match effect {
        Effect::CreateMap(options) => surface.create_map(&options),
        Effect::AddControl { control, position } => surface.add_control(&control, position),
        Effect::AddSource { id, data } => surface.add_source(&id, data),
        Effect::AddLayer(spec) => surface.add_layer(&spec),
        Effect::SetSourceData { source, data } => surface.set_source_data(&source, data),
        Effect::SetVisibility { layer, visible } => surface.set_visibility(&layer, visible),
        Effect::SetPaint { layer, paint } => surface.set_paint(&layer, &paint),
        Effect::FitBounds { bounds, options } => surface.fit_bounds(bounds, &options),
        Effect::PlaceMarker(point) => surface.place_marker(point),
        Effect::SetText { element, text } => surface.set_text(element, &text),
        Effect::ShowLegend(visible) => surface.show_legend(visible),
        Effect::SetTrigger(trigger) => surface.set_trigger(&trigger),
        Effect::Alert(message) => surface.alert(&message),
        fetch @ (Effect::FetchSingle { .. } | Effect::FetchGradient { .. }) => return Some(fetch),
    }
    None
}
