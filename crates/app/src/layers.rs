//! Map layers: the single-color isochrone and the gradient bands.
//!
//! Everything is provisioned once when the map loads. Afterwards only source
//! data, layer visibility and paint properties change; slots are never
//! recreated.

use isomap_colormap::{generate_gradient, Hsl};
use isomap_core::FeatureCollection;
use serde::{Deserialize, Serialize};

use crate::state::{DisplayFlags, Effect};

/// Source id of the single-color isochrone.
pub const SINGLE_SOURCE: &str = "isochrone";
/// Fill layer of the single-color isochrone.
pub const SINGLE_FILL: &str = "isochrone-fill";
/// Outline layer of the single-color isochrone.
pub const SINGLE_OUTLINE: &str = "isochrone-outline";
/// Color of the single-color isochrone.
pub const SINGLE_COLOR: &str = "#4285f4";

/// Number of gradient bands.
pub const GRADIENT_STEPS: usize = 12;

const FILL_OPACITY: f64 = 0.3;
const SINGLE_LINE_WIDTH: f64 = 3.0;
const SINGLE_LINE_WIDTH_OUTLINES: f64 = 4.0;
const GRADIENT_LINE_WIDTH: f64 = 1.5;
const GRADIENT_LINE_WIDTH_OUTLINES: f64 = 2.5;

/// Map layer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Fill,
    Line,
}

/// A paint property with its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    FillColor(String),
    FillOpacity(f64),
    LineColor(String),
    LineWidth(f64),
}

impl Paint {
    /// Style-spec property name.
    pub fn property(&self) -> &'static str {
        match self {
            Self::FillColor(_) => "fill-color",
            Self::FillOpacity(_) => "fill-opacity",
            Self::LineColor(_) => "line-color",
            Self::LineWidth(_) => "line-width",
        }
    }
}

/// Everything needed to add one layer to the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub id: String,
    pub kind: LayerKind,
    pub source: String,
    pub visible: bool,
    pub paint: Vec<Paint>,
}

/// One gradient band: a source with its fill and outline layers.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSlot {
    pub source_id: String,
    pub fill_id: String,
    pub line_id: String,
    pub color: Hsl,
}

impl GradientSlot {
    fn new(index: usize, color: Hsl) -> Self {
        let source_id = format!("isochrone-gradient-{index}");
        Self {
            fill_id: format!("{source_id}-fill"),
            line_id: format!("{source_id}-line"),
            source_id,
            color,
        }
    }
}

/// Owns the layer ids and produces the effects that maintain them.
#[derive(Debug, Clone)]
pub struct LayerManager {
    slots: Vec<GradientSlot>,
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new(GRADIENT_STEPS)
    }
}

impl LayerManager {
    /// Layer set with `steps` gradient slots colored blue to red.
    pub fn new(steps: usize) -> Self {
        let slots = generate_gradient(steps)
            .into_iter()
            .enumerate()
            .map(|(i, color)| GradientSlot::new(i, color))
            .collect();
        Self { slots }
    }

    pub fn slots(&self) -> &[GradientSlot] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Sources and layers to add when the map has loaded.
    pub fn setup_effects(&self) -> Vec<Effect> {
        let mut effects = vec![
            Effect::AddSource {
                id: SINGLE_SOURCE.into(),
                data: FeatureCollection::empty(),
            },
            Effect::AddLayer(LayerSpec {
                id: SINGLE_FILL.into(),
                kind: LayerKind::Fill,
                source: SINGLE_SOURCE.into(),
                visible: true,
                paint: vec![
                    Paint::FillColor(SINGLE_COLOR.into()),
                    Paint::FillOpacity(FILL_OPACITY),
                ],
            }),
            Effect::AddLayer(LayerSpec {
                id: SINGLE_OUTLINE.into(),
                kind: LayerKind::Line,
                source: SINGLE_SOURCE.into(),
                visible: true,
                paint: vec![
                    Paint::LineColor(SINGLE_COLOR.into()),
                    Paint::LineWidth(SINGLE_LINE_WIDTH),
                ],
            }),
        ];

        for slot in &self.slots {
            let color = slot.color.to_string();
            effects.push(Effect::AddSource {
                id: slot.source_id.clone(),
                data: FeatureCollection::empty(),
            });
            effects.push(Effect::AddLayer(LayerSpec {
                id: slot.fill_id.clone(),
                kind: LayerKind::Fill,
                source: slot.source_id.clone(),
                visible: false,
                paint: vec![
                    Paint::FillColor(color.clone()),
                    Paint::FillOpacity(FILL_OPACITY),
                ],
            }));
            effects.push(Effect::AddLayer(LayerSpec {
                id: slot.line_id.clone(),
                kind: LayerKind::Line,
                source: slot.source_id.clone(),
                visible: false,
                paint: vec![
                    Paint::LineColor(color),
                    Paint::LineWidth(GRADIENT_LINE_WIDTH),
                ],
            }));
        }

        effects
    }

    /// Show the layer set selected by `flags` and hide the other, then apply
    /// outline styling.
    pub fn visibility_effects(&self, flags: &DisplayFlags) -> Vec<Effect> {
        let gradient = flags.use_gradient;
        let mut effects = vec![
            visibility(SINGLE_FILL, !gradient),
            visibility(SINGLE_OUTLINE, !gradient),
        ];
        for slot in &self.slots {
            effects.push(visibility(&slot.fill_id, gradient));
            effects.push(visibility(&slot.line_id, gradient));
        }
        effects.extend(self.outline_effects(flags));
        effects
    }

    /// Fill opacity and line width for the active layer set.
    ///
    /// Outlines-only mode hides fills and thickens lines.
    pub fn outline_effects(&self, flags: &DisplayFlags) -> Vec<Effect> {
        let fill_opacity = if flags.outlines_only { 0.0 } else { FILL_OPACITY };

        if flags.use_gradient {
            let width = if flags.outlines_only {
                GRADIENT_LINE_WIDTH_OUTLINES
            } else {
                GRADIENT_LINE_WIDTH
            };
            self.slots
                .iter()
                .flat_map(|slot| {
                    [
                        paint(&slot.fill_id, Paint::FillOpacity(fill_opacity)),
                        paint(&slot.line_id, Paint::LineWidth(width)),
                    ]
                })
                .collect()
        } else {
            let width = if flags.outlines_only {
                SINGLE_LINE_WIDTH_OUTLINES
            } else {
                SINGLE_LINE_WIDTH
            };
            vec![
                paint(SINGLE_FILL, Paint::FillOpacity(fill_opacity)),
                paint(SINGLE_OUTLINE, Paint::LineWidth(width)),
            ]
        }
    }

    /// Empty every gradient source.
    pub fn clear_gradient_effects(&self) -> Vec<Effect> {
        self.slots
            .iter()
            .map(|slot| Effect::SetSourceData {
                source: slot.source_id.clone(),
                data: FeatureCollection::empty(),
            })
            .collect()
    }
}

fn visibility(layer: &str, visible: bool) -> Effect {
    Effect::SetVisibility {
        layer: layer.to_string(),
        visible,
    }
}

fn paint(layer: &str, paint: Paint) -> Effect {
    Effect::SetPaint {
        layer: layer.to_string(),
        paint,
    }
}
