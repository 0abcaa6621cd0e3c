//! Interaction controller: turns commands into state changes and effects.
//!
//! The controller never touches the map or the network itself. Every
//! command returns the effects its host must carry out, in order, which keeps
//! the whole interaction testable without a rendering surface.

use isomap_core::steps::{color_index, time_steps, MIN_MINUTES};
use isomap_core::{bounds, FeatureCollection, LngLat};
use tracing::{debug, error, info, warn};

use crate::bootstrap::{bootstrap_effects, FitOptions, MapOptions};
use crate::layers::{LayerManager, SINGLE_SOURCE};
use crate::state::{AppState, Command, Effect, Element, Legend, TriggerState};

/// Alert shown when calculate is pressed before a point is chosen.
pub const NO_SELECTION_ALERT: &str = "Please select a location on the map first";
/// Alert shown when any isochrone request fails.
pub const FETCH_FAILED_ALERT: &str = "Error calculating travel times. Please try again.";

/// Legend bounds used when a gradient produced no thresholds.
const LEGEND_FALLBACK_MIN: u32 = MIN_MINUTES;
const LEGEND_FALLBACK_MAX: u32 = 60;

/// Owns the application state and the layer layout.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    state: AppState,
    layers: LayerManager,
    map: MapOptions,
    fit: FitOptions,
}

impl Controller {
    pub fn new(map: MapOptions, layers: LayerManager) -> Self {
        Self {
            state: AppState::new(),
            layers,
            map,
            fit: FitOptions::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn layers(&self) -> &LayerManager {
        &self.layers
    }

    /// Handle one command.
    pub fn handle(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Init => bootstrap_effects(&self.map),
            Command::MapLoaded => self.on_map_loaded(),
            Command::MapClicked(point) => self.on_map_clicked(point),
            Command::TimeChanged(minutes) => self.on_time_changed(minutes),
            Command::ModeChanged(mode) => {
                self.state.set_mode(mode);
                Vec::new()
            }
            Command::GradientToggled(on) => self.on_gradient_toggled(on),
            Command::OutlinesOnlyToggled(on) => {
                self.state.set_outlines_only(on);
                if self.state.selected_point().is_some() {
                    self.layers.outline_effects(self.state.flags())
                } else {
                    Vec::new()
                }
            }
            Command::RingsToggled(on) => {
                self.state.set_gradient_rings(on);
                Vec::new()
            }
            Command::CalculatePressed => self.on_calculate(),
            Command::GradientProgress {
                generation,
                done,
                total,
            } => {
                if !self.state.is_current(generation) {
                    return Vec::new();
                }
                self.set_trigger(TriggerState::progress(done, total))
            }
            Command::SingleLoaded { generation, result } => {
                if !self.state.finish_calculation(generation) {
                    debug!(generation, "dropping stale isochrone result");
                    return Vec::new();
                }
                let mut effects = match result {
                    Ok(fc) => self.display_single(fc),
                    Err(e) => {
                        error!("Error fetching isochrones: {e}");
                        vec![Effect::Alert(FETCH_FAILED_ALERT.into())]
                    }
                };
                effects.extend(self.set_trigger(TriggerState::idle()));
                effects
            }
            Command::GradientLoaded {
                generation,
                minutes,
                result,
            } => {
                if !self.state.finish_calculation(generation) {
                    debug!(generation, "dropping stale gradient result");
                    return Vec::new();
                }
                let mut effects = match result {
                    Ok(results) => self.display_gradient(&minutes, results),
                    Err(e) => {
                        error!("Error calculating gradient isochrones: {e}");
                        vec![Effect::Alert(FETCH_FAILED_ALERT.into())]
                    }
                };
                effects.extend(self.set_trigger(TriggerState::idle()));
                effects
            }
        }
    }

    fn on_map_loaded(&mut self) -> Vec<Effect> {
        self.state.mark_map_loaded();
        self.layers.setup_effects()
    }

    fn on_map_clicked(&mut self, point: LngLat) -> Vec<Effect> {
        self.state.select_point(point);
        vec![
            Effect::PlaceMarker(point),
            Effect::SetText {
                element: Element::LocationInfo,
                text: format!("Longitude: {:.5}, Latitude: {:.5}", point.lng, point.lat),
            },
        ]
    }

    fn on_time_changed(&mut self, minutes: u32) -> Vec<Effect> {
        self.state.set_minutes(minutes);
        let max_label = Legend::minutes_label(minutes);
        self.state.set_legend_max(max_label.clone());
        vec![
            Effect::SetText {
                element: Element::TimeValue,
                text: minutes.to_string(),
            },
            Effect::SetText {
                element: Element::MaxTime,
                text: max_label,
            },
        ]
    }

    fn on_gradient_toggled(&mut self, on: bool) -> Vec<Effect> {
        self.state.set_use_gradient(on);
        let mut effects = vec![Effect::ShowLegend(on)];
        if self.state.selected_point().is_some() {
            effects.extend(self.layers.visibility_effects(self.state.flags()));
        }
        effects
    }

    fn on_calculate(&mut self) -> Vec<Effect> {
        let Some(query) = self.state.current_query() else {
            return vec![Effect::Alert(NO_SELECTION_ALERT.into())];
        };
        if !self.state.map_loaded() {
            warn!("calculate pressed before the map finished loading; ignoring");
            return Vec::new();
        }
        let Some(generation) = self.state.begin_calculation() else {
            warn!("calculation already in progress; ignoring");
            return Vec::new();
        };

        info!(
            point = %query.point,
            minutes = query.minutes,
            mode = %query.mode,
            gradient = self.state.flags().use_gradient,
            "calculating isochrone"
        );

        if self.state.flags().use_gradient {
            let minutes = time_steps(query.minutes, self.layers.slot_count());
            debug!(?minutes, "time steps for gradient");
            let mut effects = self.set_trigger(TriggerState::busy(TriggerState::GRADIENT_LABEL));
            effects.push(Effect::FetchGradient {
                generation,
                query,
                minutes,
            });
            effects
        } else {
            let mut effects = self.set_trigger(TriggerState::busy(TriggerState::BUSY_LABEL));
            effects.push(Effect::FetchSingle { generation, query });
            effects
        }
    }

    fn display_single(&mut self, fc: FeatureCollection) -> Vec<Effect> {
        let fit = bounds(&fc);
        let mut effects = vec![Effect::SetSourceData {
            source: SINGLE_SOURCE.into(),
            data: fc,
        }];
        if !self.state.flags().use_gradient {
            effects.extend(self.layers.visibility_effects(self.state.flags()));
        }
        effects.extend(self.fit_bounds(fit));
        effects
    }

    fn display_gradient(
        &mut self,
        minutes: &[u32],
        results: Vec<FeatureCollection>,
    ) -> Vec<Effect> {
        let results = self.process_rings(results);
        let fit = results.first().and_then(bounds);
        let count = results.len();
        let palette = self.layers.slot_count();

        let mut effects = self.layers.clear_gradient_effects();
        for (i, fc) in results.into_iter().enumerate() {
            let slot = &self.layers.slots()[color_index(i, count, palette)];
            effects.push(Effect::SetSourceData {
                source: slot.source_id.clone(),
                data: fc,
            });
        }

        effects.extend(self.layers.visibility_effects(self.state.flags()));

        let min_label =
            Legend::minutes_label(minutes.last().copied().unwrap_or(LEGEND_FALLBACK_MIN));
        let max_label =
            Legend::minutes_label(minutes.first().copied().unwrap_or(LEGEND_FALLBACK_MAX));
        self.state.set_legend_range(min_label.clone(), max_label.clone());
        effects.push(Effect::SetText {
            element: Element::MinTime,
            text: min_label,
        });
        effects.push(Effect::SetText {
            element: Element::MaxTime,
            text: max_label,
        });

        effects.extend(self.fit_bounds(fit));
        info!(bands = count, "gradient isochrones displayed");
        effects
    }

    /// Ring differencing is not implemented: bands are passed through as
    /// full polygons whether or not the rings flag is set.
    fn process_rings(&self, results: Vec<FeatureCollection>) -> Vec<FeatureCollection> {
        if self.state.flags().use_gradient_rings {
            debug!("gradient rings requested; drawing full polygons");
        }
        results
    }

    fn fit_bounds(&self, rect: Option<geo_types::Rect<f64>>) -> Option<Effect> {
        rect.map(|bounds| Effect::FitBounds {
            bounds,
            options: self.fit,
        })
    }

    fn set_trigger(&mut self, trigger: TriggerState) -> Vec<Effect> {
        self.state.set_trigger(trigger.clone());
        vec![Effect::SetTrigger(trigger)]
    }
}
