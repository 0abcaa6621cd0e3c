//! Application state, mutated only through named operations.

use isomap_core::{LngLat, TravelMode, TravelQuery};
use serde::{Deserialize, Serialize};

use super::ui::{Legend, TriggerState};

/// Initial value of the time slider, in minutes.
pub const DEFAULT_MINUTES: u32 = 30;

/// How isochrones are drawn. The flags combine freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFlags {
    /// Draw one band per time threshold instead of a single polygon.
    pub use_gradient: bool,
    /// Draw bands as rings (larger minus smaller isochrone). Accepted but
    /// not applied: bands are always drawn as full polygons.
    pub use_gradient_rings: bool,
    /// Hide fills and thicken outlines.
    pub outlines_only: bool,
}

/// Everything the page remembers between events.
#[derive(Debug, Clone)]
pub struct AppState {
    selected_point: Option<LngLat>,
    minutes: u32,
    mode: TravelMode,
    flags: DisplayFlags,
    map_loaded: bool,
    trigger: TriggerState,
    legend: Legend,
    /// Generation of the calculation currently in flight.
    in_flight: Option<u64>,
    /// Counter for generating request generations.
    next_generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            selected_point: None,
            minutes: DEFAULT_MINUTES,
            mode: TravelMode::default(),
            flags: DisplayFlags::default(),
            map_loaded: false,
            trigger: TriggerState::idle(),
            legend: Legend::default(),
            in_flight: None,
            next_generation: 1,
        }
    }

    pub fn selected_point(&self) -> Option<LngLat> {
        self.selected_point
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    pub fn flags(&self) -> &DisplayFlags {
        &self.flags
    }

    pub fn map_loaded(&self) -> bool {
        self.map_loaded
    }

    pub fn trigger(&self) -> &TriggerState {
        &self.trigger
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Replace the selected point. Only the latest click is kept.
    pub fn select_point(&mut self, point: LngLat) {
        self.selected_point = Some(point);
    }

    pub fn set_minutes(&mut self, minutes: u32) {
        self.minutes = minutes;
    }

    pub fn set_mode(&mut self, mode: TravelMode) {
        self.mode = mode;
    }

    pub fn set_use_gradient(&mut self, on: bool) {
        self.flags.use_gradient = on;
        self.legend.visible = on;
    }

    pub fn set_gradient_rings(&mut self, on: bool) {
        self.flags.use_gradient_rings = on;
    }

    pub fn set_outlines_only(&mut self, on: bool) {
        self.flags.outlines_only = on;
    }

    pub fn mark_map_loaded(&mut self) {
        self.map_loaded = true;
    }

    pub fn set_trigger(&mut self, trigger: TriggerState) {
        self.trigger = trigger;
    }

    pub fn set_legend_range(&mut self, min_label: String, max_label: String) {
        self.legend.min_label = min_label;
        self.legend.max_label = max_label;
    }

    pub fn set_legend_max(&mut self, max_label: String) {
        self.legend.max_label = max_label;
    }

    /// The query a calculation would send right now, if a point is selected.
    pub fn current_query(&self) -> Option<TravelQuery> {
        self.selected_point
            .map(|p| TravelQuery::new(p, self.minutes, self.mode))
    }

    /// Start a calculation and return its generation, or `None` if one is
    /// already in flight.
    pub fn begin_calculation(&mut self) -> Option<u64> {
        if self.in_flight.is_some() {
            return None;
        }
        let generation = self.next_generation;
        self.next_generation += 1;
        self.in_flight = Some(generation);
        Some(generation)
    }

    /// Whether `generation` is the calculation in flight.
    pub fn is_current(&self, generation: u64) -> bool {
        self.in_flight == Some(generation)
    }

    /// Finish the calculation `generation`. Returns `false` for a stale
    /// generation, which leaves the state untouched.
    pub fn finish_calculation(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.in_flight = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_needs_a_point() {
        let mut state = AppState::new();
        assert!(state.current_query().is_none());

        state.select_point(LngLat::new(1.0, 2.0).unwrap());
        state.select_point(LngLat::new(3.0, 4.0).unwrap());
        state.set_minutes(20);
        state.set_mode(TravelMode::Walking);

        let q = state.current_query().unwrap();
        assert_eq!(q.point.to_array(), [3.0, 4.0]);
        assert_eq!(q.minutes, 20);
        assert_eq!(q.mode, TravelMode::Walking);
    }

    #[test]
    fn one_calculation_at_a_time() {
        let mut state = AppState::new();
        let first = state.begin_calculation().unwrap();
        assert!(state.is_busy());
        assert!(state.begin_calculation().is_none());

        assert!(!state.finish_calculation(first + 1));
        assert!(state.is_busy());
        assert!(state.finish_calculation(first));
        assert!(!state.is_busy());

        let second = state.begin_calculation().unwrap();
        assert!(second > first);
    }

    #[test]
    fn gradient_flag_drives_legend() {
        let mut state = AppState::new();
        assert!(!state.legend().visible);
        state.set_use_gradient(true);
        assert!(state.flags().use_gradient);
        assert!(state.legend().visible);
    }
}
