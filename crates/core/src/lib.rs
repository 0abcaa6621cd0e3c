//! # isomap core
//!
//! Core types shared by the isomap crates.
//!
//! This crate provides:
//! - `LngLat`: a validated map coordinate
//! - `FeatureCollection`: the GeoJSON shape returned by the isochrone API
//! - `bounds`: bounding boxes over polygon features
//! - `TravelMode` / `TravelQuery`: what to ask the isochrone API for
//! - `steps`: non-linear gradient time thresholds and palette mapping
//! - `token`: request/response bodies of the token endpoint

pub mod error;
pub mod geo;
pub mod steps;
pub mod token;
pub mod travel;
pub mod vector;

pub use error::{Error, Result};
pub use geo::{bounds, LngLat};
pub use travel::{TravelMode, TravelQuery};
pub use vector::{Feature, FeatureCollection, Geometry, Position};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geo::{bounds, LngLat};
    pub use crate::steps::{color_index, time_steps};
    pub use crate::travel::{TravelMode, TravelQuery};
    pub use crate::vector::{Feature, FeatureCollection, Geometry};
}
