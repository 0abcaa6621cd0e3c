//! Error types for isomap

use thiserror::Error;

/// Main error type for isomap core operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinate: {name} = {value} ({reason})")]
    InvalidCoordinate {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Unknown travel mode: {0}")]
    UnknownTravelMode(String),

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] serde_json::Error),
}

/// Result type alias for isomap core operations
pub type Result<T> = std::result::Result<T, Error>;
