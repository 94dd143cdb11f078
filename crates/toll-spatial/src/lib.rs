//! `toll-spatial` — route geometry, gate zones, and gate indexing.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`route`] | `Route` polyline: great-circle length, fractional interpolation |
//! | [`zone`]  | `GateZone` circle, segment clipping, `ZoneClip`               |
//! | [`gate`]  | `TollGate`, `GateTable` (R-tree indexed)                      |
//! | [`error`] | `SpatialError`, `SpatialResult<T>`                            |
//!
//! # Coordinate conventions
//!
//! Zone clipping is planar in (lon, lat) degrees, matching how gate radii are
//! configured.  Every length that feeds a toll or a distance is measured with
//! the haversine great-circle distance in kilometres.

pub mod error;
pub mod gate;
pub mod route;
pub mod zone;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use gate::{GateTable, TollGate};
pub use route::Route;
pub use zone::{GateZone, ZoneClip};
