//! Commands into the controller and the effects it asks for.

use geo_types::Rect;
use isomap_client::ClientError;
use isomap_core::{FeatureCollection, LngLat, TravelMode, TravelQuery};

use super::ui::{Element, TriggerState};
use crate::bootstrap::{Control, ControlPosition, FitOptions, MapOptions};
use crate::layers::{LayerSpec, Paint};

/// Events from the page, the map, and finished background work.
#[derive(Debug)]
pub enum Command {
    /// Page loaded: create the map.
    Init,
    /// The map style finished loading.
    MapLoaded,
    /// The user clicked the map.
    MapClicked(LngLat),
    /// Time slider moved.
    TimeChanged(u32),
    /// Travel mode selector changed.
    ModeChanged(TravelMode),
    /// Gradient checkbox changed.
    GradientToggled(bool),
    /// Outlines-only checkbox changed.
    OutlinesOnlyToggled(bool),
    /// Gradient-rings checkbox changed.
    RingsToggled(bool),
    /// The calculate button was pressed.
    CalculatePressed,
    /// A gradient batch is about to be sent.
    GradientProgress {
        generation: u64,
        done: usize,
        total: usize,
    },
    /// A single-color isochrone request finished.
    SingleLoaded {
        generation: u64,
        result: Result<FeatureCollection, ClientError>,
    },
    /// All gradient requests finished, or one of them failed.
    GradientLoaded {
        generation: u64,
        minutes: Vec<u32>,
        result: Result<Vec<FeatureCollection>, ClientError>,
    },
}

/// Work the controller asks its host to carry out, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    // ── Map ──────────────────────────────────────────────────────────
    CreateMap(MapOptions),
    AddControl {
        control: Control,
        position: ControlPosition,
    },
    AddSource {
        id: String,
        data: FeatureCollection,
    },
    AddLayer(LayerSpec),
    SetSourceData {
        source: String,
        data: FeatureCollection,
    },
    SetVisibility {
        layer: String,
        visible: bool,
    },
    SetPaint {
        layer: String,
        paint: Paint,
    },
    FitBounds {
        bounds: Rect<f64>,
        options: FitOptions,
    },
    PlaceMarker(LngLat),

    // ── Page ─────────────────────────────────────────────────────────
    SetText {
        element: Element,
        text: String,
    },
    ShowLegend(bool),
    SetTrigger(TriggerState),
    Alert(String),

    // ── Network ──────────────────────────────────────────────────────
    /// Fetch one isochrone; answer with [`Command::SingleLoaded`].
    FetchSingle {
        generation: u64,
        query: TravelQuery,
    },
    /// Fetch one isochrone per threshold; answer with
    /// [`Command::GradientProgress`] and [`Command::GradientLoaded`].
    FetchGradient {
        generation: u64,
        query: TravelQuery,
        minutes: Vec<u32>,
    },
}

impl Effect {
    /// Whether this effect needs the network rather than the surface.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::FetchSingle { .. } | Self::FetchGradient { .. })
    }
}
