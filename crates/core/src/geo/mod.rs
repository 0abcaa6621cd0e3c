//! Geographic primitives: coordinates and bounding boxes.

mod bbox;
mod lnglat;

pub use bbox::{bounds, BoundsBuilder};
pub use lnglat::LngLat;
