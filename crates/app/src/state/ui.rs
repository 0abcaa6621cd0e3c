//! Values shown by the page controls outside the map.

use serde::{Deserialize, Serialize};

/// Text elements the controller writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    /// Coordinates of the selected point.
    LocationInfo,
    /// Value next to the time slider.
    TimeValue,
    /// Shortest time on the gradient legend.
    MinTime,
    /// Longest time on the gradient legend.
    MaxTime,
}

impl Element {
    /// DOM id of the element.
    pub fn id(&self) -> &'static str {
        match self {
            Self::LocationInfo => "location-info",
            Self::TimeValue => "time-value",
            Self::MinTime => "min-time",
            Self::MaxTime => "max-time",
        }
    }
}

/// Label and enabled state of the calculate button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerState {
    pub label: String,
    pub enabled: bool,
}

impl TriggerState {
    pub const IDLE_LABEL: &'static str = "Calculate Isochrone";
    pub const BUSY_LABEL: &'static str = "Calculating...";
    pub const GRADIENT_LABEL: &'static str = "Calculating gradient...";

    pub fn idle() -> Self {
        Self {
            label: Self::IDLE_LABEL.to_string(),
            enabled: true,
        }
    }

    pub fn busy(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: false,
        }
    }

    /// Busy state showing gradient batch progress.
    pub fn progress(done: usize, total: usize) -> Self {
        Self::busy(format!("Calculating... {done}/{total}"))
    }

    pub fn is_idle(&self) -> bool {
        self.enabled && self.label == Self::IDLE_LABEL
    }
}

impl Default for TriggerState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Gradient legend: visibility and end labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    pub visible: bool,
    pub min_label: String,
    pub max_label: String,
}

impl Legend {
    pub fn minutes_label(minutes: u32) -> String {
        format!("{minutes} min")
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            visible: false,
            min_label: Self::minutes_label(5),
            max_label: Self::minutes_label(60),
        }
    }
}
