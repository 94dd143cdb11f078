//! `toll-core` — foundational types for the toll simulation workspace.
//!
//! This crate is a dependency of every other `toll-*` crate.  It has no
//! `toll-*` dependencies and only `rand` and `thiserror` externally, plus an
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `VehicleId`, `UserId`, `GateId`                       |
//! | [`geo`]     | `GeoPoint`, haversine distance, `AreaBounds`          |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]     | `SimRng` (seeded, reproducible)                       |
//! | [`vehicle`] | `VehicleKind` enum and its map icon                   |
//! | [`error`]   | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{AreaBounds, GeoPoint};
pub use ids::{GateId, UserId, VehicleId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
pub use vehicle::VehicleKind;
