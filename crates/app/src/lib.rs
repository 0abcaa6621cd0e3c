//! # isomap app
//!
//! Headless core of the isochrone map page.
//!
//! User and map events enter as [`Command`]s. The [`Controller`] updates the
//! [`AppState`] and answers with [`Effect`]s: map layer updates, page control
//! updates, and isochrone requests. A [`Session`] runs those effects against a
//! [`MapSurface`] and an [`IsochroneSource`](isomap_client::IsochroneSource).
//!
//! ```no_run
//! use isomap_app::{Command, RecordingSurface, Session};
//! use isomap_client::{IsochroneClient, IsochroneClientOptions};
//! use isomap_core::LngLat;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IsochroneClient::new("pk.token", IsochroneClientOptions::default())?;
//! let mut session = Session::new(client, RecordingSurface::new());
//! session.boot().await;
//! session.dispatch(Command::MapClicked(LngLat::new(-74.0, 40.7)?)).await;
//! session.dispatch(Command::CalculatePressed).await;
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod controller;
pub mod layers;
pub mod session;
pub mod state;
pub mod surface;

pub use bootstrap::{FitOptions, MapOptions};
pub use controller::{Controller, FETCH_FAILED_ALERT, NO_SELECTION_ALERT};
pub use layers::{GradientSlot, LayerManager, Paint, GRADIENT_STEPS};
pub use session::Session;
pub use state::{AppState, Command, DisplayFlags, Effect, Element, Legend, TriggerState};
pub use surface::{apply_effect, MapSurface, RecordingSurface};
