//! The vehicle actor.

use toll_core::{GeoPoint, UserId, VehicleId, VehicleKind};
use toll_spatial::{GateTable, Route};

use crate::{MobilityError, MobilityResult, VehicleState};

/// Scenario input for one vehicle.  Start and end points are drawn (or
/// supplied) by the simulation builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleSpec {
    pub id:       VehicleId,
    pub owner:    UserId,
    /// Toll-exempt vehicles move normally but are never charged.
    pub non_toll: bool,
}

impl VehicleSpec {
    pub fn new(id: VehicleId, owner: UserId) -> Self {
        Self { id, owner, non_toll: false }
    }

    pub fn exempt(mut self) -> Self {
        self.non_toll = true;
        self
    }
}

/// Outcome of one successful [`Vehicle::advance`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Advance {
    /// Cumulative distance after the step, in kilometres.
    pub distance_km: f64,
    /// Interpolated position after the step.
    pub position:    GeoPoint,
    /// `true` if this step completed the trip.
    pub arrived:     bool,
}

/// One simulated vehicle: route, progress, and toll exemption.
///
/// The owning user's balance is *not* stored here; the vehicle only carries
/// the `owner` handle used to charge the ledger.
#[derive(Clone, Debug)]
pub struct Vehicle {
    id:          VehicleId,
    owner:       UserId,
    kind:        VehicleKind,
    non_toll:    bool,
    start:       GeoPoint,
    end:         GeoPoint,
    route:       Route,
    trip_km:     f64,
    traveled_km: f64,
    position:    GeoPoint,
    state:       VehicleState,
}

impl Vehicle {
    /// Build a vehicle whose route runs `start → every gate → end`.
    ///
    /// `trip_km` comes from the owner's account.  A zero-length trip starts
    /// (and stays) `Arrived`.
    pub fn new(
        spec:    &VehicleSpec,
        kind:    VehicleKind,
        trip_km: f64,
        start:   GeoPoint,
        end:     GeoPoint,
        gates:   &GateTable,
    ) -> MobilityResult<Self> {
        if !trip_km.is_finite() || trip_km < 0.0 {
            return Err(MobilityError::InvalidTrip { vehicle: spec.id, trip_km });
        }
        let route = Route::through_gates(start, gates, end)?;
        let state = if trip_km > 0.0 { VehicleState::Moving } else { VehicleState::Arrived };

        Ok(Self {
            id: spec.id,
            owner: spec.owner,
            kind,
            non_toll: spec.non_toll,
            start,
            end,
            route,
            trip_km,
            traveled_km: 0.0,
            position: start,
            state,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    pub fn non_toll(&self) -> bool {
        self.non_toll
    }

    pub fn start(&self) -> GeoPoint {
        self.start
    }

    pub fn end(&self) -> GeoPoint {
        self.end
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn trip_km(&self) -> f64 {
        self.trip_km
    }

    pub fn traveled_km(&self) -> f64 {
        self.traveled_km
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn state(&self) -> VehicleState {
        self.state
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Move forward by `step_km`.
    ///
    /// Returns `Ok(None)` once the vehicle has arrived; it never moves again.
    ///
    /// # Errors
    ///
    /// [`MobilityError::InvalidStep`] for a non-positive or non-finite step.
    pub fn advance(&mut self, step_km: f64) -> MobilityResult<Option<Advance>> {
        if !step_km.is_finite() || step_km <= 0.0 {
            return Err(MobilityError::InvalidStep(step_km));
        }
        if !self.state.is_moving() {
            return Ok(None);
        }

        self.traveled_km = (self.traveled_km + step_km).min(self.trip_km);
        self.position = self.route.interpolate(self.traveled_km / self.route.length_km());

        let arrived = self.traveled_km >= self.trip_km;
        if arrived {
            self.state = VehicleState::Arrived;
        }

        Ok(Some(Advance {
            distance_km: self.traveled_km,
            position:    self.position,
            arrived,
        }))
    }
}
