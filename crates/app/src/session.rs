//! Drives the controller: applies its effects to a surface and runs its
//! network requests, feeding the outcomes back as commands.

use std::collections::VecDeque;

use isomap_client::{fetch_gradient, GradientOptions, IsochroneSource};
use tracing::debug;

use crate::bootstrap::MapOptions;
use crate::controller::Controller;
use crate::layers::LayerManager;
use crate::state::{AppState, Command, Effect};
use crate::surface::{apply_effect, MapSurface};

/// One page session: controller, map surface and isochrone source.
///
/// `dispatch` takes `&mut self`, so a session runs one command chain at a
/// time; the controller additionally refuses a second calculation while one
/// is in flight.
pub struct Session<S, M> {
    controller: Controller,
    source: S,
    surface: M,
    gradient: GradientOptions,
}

impl<S: IsochroneSource, M: MapSurface> Session<S, M> {
    /// Session with the default map, layers and batching.
    pub fn new(source: S, surface: M) -> Self {
        Self::with_options(
            source,
            surface,
            MapOptions::default(),
            LayerManager::default(),
            GradientOptions::default(),
        )
    }

    pub fn with_options(
        source: S,
        surface: M,
        map: MapOptions,
        layers: LayerManager,
        gradient: GradientOptions,
    ) -> Self {
        Self {
            controller: Controller::new(map, layers),
            source,
            surface,
            gradient,
        }
    }

    pub fn state(&self) -> &AppState {
        self.controller.state()
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }

    pub fn into_surface(self) -> M {
        self.surface
    }

    /// Create the map and provision its layers, for surfaces that have no
    /// asynchronous load event of their own.
    pub async fn boot(&mut self) {
        self.dispatch(Command::Init).await;
        self.dispatch(Command::MapLoaded).await;
    }

    /// Handle `command` and everything it triggers, until nothing is left.
    pub async fn dispatch(&mut self, command: Command) {
        let Self {
            controller,
            source,
            surface,
            gradient,
        } = self;

        let mut queue = VecDeque::from([command]);
        while let Some(command) = queue.pop_front() {
            for effect in controller.handle(command) {
                let Some(fetch) = apply_effect(surface, effect) else {
                    continue;
                };
                match fetch {
                    Effect::FetchSingle { generation, query } => {
                        let result = source.fetch(&query).await;
                        queue.push_back(Command::SingleLoaded { generation, result });
                    }
                    Effect::FetchGradient {
                        generation,
                        query,
                        minutes,
                    } => {
                        let on_progress = |done: usize, total: usize| {
                            debug!(done, total, "gradient progress");
                            let progress = Command::GradientProgress {
                                generation,
                                done,
                                total,
                            };
                            for effect in controller.handle(progress) {
                                apply_effect(surface, effect);
                            }
                        };
                        let result =
                            fetch_gradient(&*source, query, &minutes, gradient, on_progress).await;
                        queue.push_back(Command::GradientLoaded {
                            generation,
                            minutes,
                            result,
                        });
                    }
                    _ => {}
                }
            }
        }
    }
}
