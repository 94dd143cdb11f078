//! Read-only end-of-run snapshot handed to output consumers.

use toll_core::{GeoPoint, Tick, UserId, VehicleId, VehicleKind};
use toll_spatial::TollGate;

/// Final state of one vehicle and its owner's account.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleReport {
    pub id:                VehicleId,
    pub owner:             UserId,
    pub kind:              VehicleKind,
    pub non_toll:          bool,
    pub start:             GeoPoint,
    pub end:               GeoPoint,
    /// Route vertices: start, every gate, end.
    pub route:             Vec<GeoPoint>,
    pub trip_km:           f64,
    pub traveled_km:       f64,
    pub arrived:           bool,
    /// Owner's balance after the run.
    pub remaining_balance: f64,
}

/// Everything the map, chart, and table renderers need.
#[derive(Clone, Debug, PartialEq)]
pub struct SimReport {
    pub final_tick: Tick,
    pub gates:      Vec<TollGate>,
    /// Ascending `VehicleId` order.
    pub vehicles:   Vec<VehicleReport>,
}
