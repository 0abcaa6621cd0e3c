//! # isomap colormap
//!
//! Color ramps for isochrone gradient bands.
//!
//! Colors are produced in HSL space, sweeping the hue from blue (short travel
//! times) to red (long travel times). The main entry point is
//! [`generate_gradient`]; each [`Hsl`] renders to a CSS color string the map
//! style accepts, or converts to [`Rgb`].
//!
//! ## Usage
//!
//! ```
//! use isomap_colormap::generate_gradient;
//!
//! let colors = generate_gradient(12);
//! assert_eq!(colors[0].to_string(), "hsl(230, 100%, 45%)");
//! ```

mod gradient;
mod scheme;

pub use gradient::{generate_gradient, interpolate, HUE_END, HUE_START};
pub use scheme::{Hsl, Rgb};
