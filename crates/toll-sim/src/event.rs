//! Notification events emitted during the tick loop.

use toll_core::{GateId, Tick, VehicleId};

/// Informational events, delivered to [`SimObserver::on_event`][crate::SimObserver::on_event].
///
/// For a given vehicle and tick the order is: every `GateEntered`, then
/// `VehicleAdvanced`, then `GatePassed` (charged vehicles only), then an
/// optional `VehicleArrived`.
#[derive(Clone, Debug, PartialEq)]
pub enum TollEvent {
    /// The vehicle's route passes through `gate`'s zone.
    GateEntered {
        tick:    Tick,
        vehicle: VehicleId,
        gate:    GateId,
    },

    /// The vehicle moved this tick.
    VehicleAdvanced {
        tick:        Tick,
        vehicle:     VehicleId,
        distance_km: f64,
        /// Amount deducted this tick (0 for exempt vehicles).
        toll:        f64,
        /// Owner's balance after the deduction.
        balance:     f64,
    },

    /// A toll was deducted for this tick.  Never emitted for exempt vehicles.
    GatePassed { tick: Tick, vehicle: VehicleId },

    /// The vehicle completed its trip this tick.
    VehicleArrived { tick: Tick, vehicle: VehicleId },
}

impl TollEvent {
    pub fn tick(&self) -> Tick {
        match self {
            TollEvent::GateEntered { tick, .. }
            | TollEvent::VehicleAdvanced { tick, .. }
            | TollEvent::GatePassed { tick, .. }
            | TollEvent::VehicleArrived { tick, .. } => *tick,
        }
    }
}
