//! # isomap client
//!
//! HTTP clients for the Mapbox Isochrone API and the isomap token endpoint.
//!
//! [`IsochroneClient`] issues one request per (point, minutes, mode) and
//! parses the GeoJSON answer; [`fetch_gradient`] drives it in small
//! concurrent batches to build a multi-band gradient. Both work against the
//! [`IsochroneSource`] trait so callers can swap in their own source.
//!
//! ## Features
//!
//! - `native` (default): blocking API via tokio `block_on`

pub mod error;
pub mod gradient;
pub mod isochrone;
pub mod source;
pub mod sync_api;
pub mod token;

pub use error::{ClientError, Result};
pub use gradient::{fetch_gradient, GradientOptions};
pub use isochrone::{isochrone_url, IsochroneClient, IsochroneClientOptions, MAPBOX_API_HOST};
pub use source::IsochroneSource;
pub use token::fetch_token;

/// Blocking API re-exported as `blocking` module (native only).
#[cfg(feature = "native")]
pub mod blocking {
    pub use crate::sync_api::*;
}
