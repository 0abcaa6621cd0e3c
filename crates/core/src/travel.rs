//! Travel modes and isochrone queries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geo::LngLat;

/// Travel modes offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelMode {
    #[default]
    Driving,
    DrivingTraffic,
    Walking,
    Cycling,
    /// Not supported by the Mapbox Isochrone API; sent as `driving-traffic`.
    Transit,
}

impl TravelMode {
    /// All modes, in selector order.
    pub const ALL: &[TravelMode] = &[
        Self::Driving,
        Self::DrivingTraffic,
        Self::Walking,
        Self::Cycling,
        Self::Transit,
    ];

    /// Identifier as shown in the mode selector.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::DrivingTraffic => "driving-traffic",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Transit => "transit",
        }
    }

    /// Routing profile sent to the isochrone API.
    pub fn wire_profile(&self) -> &'static str {
        match self {
            Self::Transit => Self::DrivingTraffic.name(),
            other => other.name(),
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TravelMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownTravelMode(s.to_string()))
    }
}

/// One isochrone request: where from, how long, and how.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelQuery {
    pub point: LngLat,
    pub minutes: u32,
    pub mode: TravelMode,
}

impl TravelQuery {
    pub fn new(point: LngLat, minutes: u32, mode: TravelMode) -> Self {
        Self { point, minutes, mode }
    }

    /// The same query with a different time limit.
    pub fn with_minutes(self, minutes: u32) -> Self {
        Self { minutes, ..self }
    }
}
