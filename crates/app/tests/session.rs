//! End-to-end runs of a session against a fake isochrone source.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use isomap_app::{
    Command, Element, GradientSlot, LayerManager, MapOptions, RecordingSurface, Session,
    TriggerState, FETCH_FAILED_ALERT, NO_SELECTION_ALERT,
};
use isomap_client::{ClientError, GradientOptions, IsochroneSource};
use isomap_core::{Feature, FeatureCollection, Geometry, LngLat, TravelMode, TravelQuery};

/// Answers every query with a square whose size grows with the minutes.
#[derive(Default)]
struct FakeSource {
    fail: bool,
    seen: Mutex<Vec<TravelQuery>>,
}

impl FakeSource {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn seen(&self) -> Vec<TravelQuery> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl IsochroneSource for FakeSource {
    async fn fetch(&self, query: &TravelQuery) -> isomap_client::Result<FeatureCollection> {
        self.seen.lock().unwrap().push(*query);
        if self.fail {
            return Err(ClientError::Status {
                endpoint: "isochrone/v1/mapbox/walking".into(),
                status: 429,
                body: "Too Many Requests".into(),
            });
        }
        let size = query.minutes as f64 / 100.0;
        let (x, y) = (query.point.lng, query.point.lat);
        let ring = vec![
            vec![x - size, y - size],
            vec![x + size, y - size],
            vec![x + size, y + size],
            vec![x - size, y + size],
            vec![x - size, y - size],
        ];
        let mut feature = Feature::new(Geometry::Polygon {
            coordinates: vec![ring],
        });
        feature.set_property("contour", query.minutes);
        Ok(FeatureCollection::new(vec![feature]))
    }
}

fn no_delay() -> GradientOptions {
    GradientOptions {
        batch_size: 3,
        batch_delay: Duration::ZERO,
    }
}

fn session(source: &FakeSource) -> Session<&FakeSource, RecordingSurface> {
    Session::with_options(
        source,
        RecordingSurface::new(),
        MapOptions::default(),
        LayerManager::default(),
        no_delay(),
    )
}

fn nyc() -> LngLat {
    LngLat::new(-74.006, 40.7128).unwrap()
}

#[tokio::test]
async fn boot_provisions_map_and_layers() {
    let source = FakeSource::default();
    let mut s = session(&source);
    s.boot().await;

    let surface = s.surface();
    assert!(surface.map.is_some());
    assert_eq!(surface.controls.len(), 2);
    assert!(surface.source("isochrone").unwrap().is_empty());
    for slot in LayerManager::default().slots() {
        assert!(surface.source(&slot.source_id).is_some());
        assert!(!surface.is_visible(&slot.fill_id));
        assert!(!surface.is_visible(&slot.line_id));
    }
    assert!(surface.trigger.is_idle());
    assert!(source.seen().is_empty());
}

#[tokio::test]
async fn single_calculation_populates_single_source() {
    let source = FakeSource::default();
    let mut s = session(&source);
    s.boot().await;

    s.dispatch(Command::MapClicked(nyc())).await;
    s.dispatch(Command::TimeChanged(20)).await;
    s.dispatch(Command::ModeChanged(TravelMode::Walking)).await;
    s.dispatch(Command::GradientToggled(false)).await;
    s.dispatch(Command::CalculatePressed).await;

    let seen = source.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].minutes, 20);
    assert_eq!(seen[0].mode, TravelMode::Walking);

    let surface = s.surface();
    assert_eq!(surface.source("isochrone").unwrap().len(), 1);
    assert!(surface.is_visible("isochrone-fill"));
    assert!(surface.is_visible("isochrone-outline"));
    for slot in LayerManager::default().slots() {
        assert!(!surface.is_visible(&slot.fill_id));
        assert!(!surface.is_visible(&slot.line_id));
    }

    let camera = surface.camera.expect("camera was not fitted");
    assert!((camera.min().x - (-74.206)).abs() < 1e-9);
    assert!((camera.max().y - 40.9128).abs() < 1e-9);

    assert_eq!(surface.marker, Some(nyc()));
    assert_eq!(
        surface.text(Element::LocationInfo),
        Some("Longitude: -74.00600, Latitude: 40.71280")
    );
    assert_eq!(surface.trigger, TriggerState::idle());
    assert!(surface.alerts.is_empty());
}

#[tokio::test]
async fn failed_fetch_resets_trigger_and_alerts_once() {
    let source = FakeSource::failing();
    let mut s = session(&source);
    s.boot().await;

    s.dispatch(Command::MapClicked(nyc())).await;
    s.dispatch(Command::CalculatePressed).await;

    let surface = s.surface();
    assert_eq!(surface.alerts, vec![FETCH_FAILED_ALERT.to_string()]);
    assert_eq!(surface.trigger.label, TriggerState::IDLE_LABEL);
    assert!(surface.trigger.enabled);
    assert!(surface.source("isochrone").unwrap().is_empty());
    assert!(!s.state().is_busy());
}

#[tokio::test]
async fn failed_gradient_alerts_once() {
    let source = FakeSource::failing();
    let mut s = session(&source);
    s.boot().await;

    s.dispatch(Command::MapClicked(nyc())).await;
    s.dispatch(Command::GradientToggled(true)).await;
    s.dispatch(Command::CalculatePressed).await;

    let surface = s.surface();
    assert_eq!(surface.alerts.len(), 1);
    assert!(surface.trigger.is_idle());
    // the failing first batch stops the gradient
    let attempted = source.seen().len();
    assert!((1..=3).contains(&attempted), "attempted {attempted}");
}

#[tokio::test]
async fn calculate_without_selection_never_fetches() {
    let source = FakeSource::default();
    let mut s = session(&source);
    s.boot().await;

    s.dispatch(Command::CalculatePressed).await;

    assert_eq!(s.surface().alerts, vec![NO_SELECTION_ALERT.to_string()]);
    assert!(source.seen().is_empty());
    assert!(s.surface().trigger.is_idle());
}

#[tokio::test]
async fn gradient_calculation_fills_palette_and_legend() {
    let source = FakeSource::default();
    let mut s = session(&source);
    s.boot().await;

    s.dispatch(Command::MapClicked(nyc())).await;
    s.dispatch(Command::TimeChanged(30)).await;
    s.dispatch(Command::GradientToggled(true)).await;
    s.dispatch(Command::CalculatePressed).await;

    let minutes: Vec<u32> = source.seen().iter().map(|q| q.minutes).collect();
    assert_eq!(minutes, vec![30, 27, 24, 21, 18, 15, 12, 9, 6, 5]);

    let surface = s.surface();
    let slots: Vec<GradientSlot> = LayerManager::default().slots().to_vec();
    let populated: Vec<&str> = surface.populated_sources().map(|(id, _)| id).collect();
    assert_eq!(populated.len(), 10);
    // largest threshold takes the first color, smallest the last
    assert_eq!(
        surface.source(&slots[0].source_id).unwrap().features[0].get_property("contour"),
        Some(&30.into())
    );
    assert_eq!(
        surface.source(&slots[11].source_id).unwrap().features[0].get_property("contour"),
        Some(&5.into())
    );
    assert!(surface.source("isochrone").unwrap().is_empty());

    for slot in &slots {
        assert!(surface.is_visible(&slot.fill_id));
        assert!(surface.is_visible(&slot.line_id));
    }
    assert!(!surface.is_visible("isochrone-fill"));
    assert!(!surface.is_visible("isochrone-outline"));

    assert!(surface.legend_visible);
    assert_eq!(surface.text(Element::MinTime), Some("5 min"));
    assert_eq!(surface.text(Element::MaxTime), Some("30 min"));

    let camera = surface.camera.unwrap();
    assert!((camera.max().x - (-73.706)).abs() < 1e-9);

    let labels: Vec<&str> = surface
        .trigger_history
        .iter()
        .map(|t| t.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            TriggerState::GRADIENT_LABEL,
            "Calculating... 3/10",
            "Calculating... 6/10",
            "Calculating... 9/10",
            "Calculating... 10/10",
            TriggerState::IDLE_LABEL,
        ]
    );
}

#[tokio::test]
async fn recalculating_single_after_gradient_hides_bands() {
    let source = FakeSource::default();
    let mut s = session(&source);
    s.boot().await;

    s.dispatch(Command::MapClicked(nyc())).await;
    s.dispatch(Command::GradientToggled(true)).await;
    s.dispatch(Command::CalculatePressed).await;
    s.dispatch(Command::GradientToggled(false)).await;
    s.dispatch(Command::CalculatePressed).await;

    let surface = s.surface();
    assert!(surface.is_visible("isochrone-fill"));
    for slot in LayerManager::default().slots() {
        assert!(!surface.is_visible(&slot.fill_id));
    }
    assert!(!surface.legend_visible);
}
