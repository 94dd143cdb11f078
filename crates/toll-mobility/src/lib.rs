//! `toll-mobility` — vehicle movement along fixed routes.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`state`]   | `VehicleState` — `Moving` / `Arrived`                      |
//! | [`vehicle`] | `VehicleSpec` (input), `Vehicle` actor, `Advance` result   |
//! | [`fleet`]   | `Fleet` — all vehicles in ascending id order               |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                       |
//!
//! # Movement model
//!
//! Each tick the driver calls [`Vehicle::advance`] with a fixed step in
//! kilometres:
//!
//! 1. traveled distance grows by the step, clamped at the assigned trip
//!    length;
//! 2. the current position is re-interpolated at `traveled / route_length`;
//! 3. the vehicle becomes `Arrived` once traveled reaches the trip length.
//!
//! An arrived vehicle ignores further `advance` calls.  There is no
//! suspension or scheduling; the driver loop owns the stepping.

pub mod error;
pub mod fleet;
pub mod state;
pub mod vehicle;


pub use error::{MobilityError, MobilityResult};
pub use fleet::Fleet;
pub use state::VehicleState;
pub use vehicle::{Advance, Vehicle, VehicleSpec};
