//! The `Fleet` — every vehicle in the run, in a stable order.

use std::collections::BTreeSet;

use toll_core::VehicleId;

use crate::{MobilityError, MobilityResult, Vehicle};

/// All vehicles, sorted by ascending `VehicleId`.
///
/// The order is the per-tick stepping order, so runs are deterministic.
/// Vehicles are never added or removed after construction.
#[derive(Clone, Debug, Default)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Sort `vehicles` by id and reject duplicates.
    pub fn new(mut vehicles: Vec<Vehicle>) -> MobilityResult<Self> {
        let mut seen = BTreeSet::new();
        for v in &vehicles {
            if !seen.insert(v.id()) {
                return Err(MobilityError::DuplicateVehicle(v.id()));
            }
        }
        vehicles.sort_by_key(Vehicle::id);
        Ok(Self { vehicles })
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Vehicle> {
        self.vehicles.iter_mut()
    }

    pub fn get(&self, id: VehicleId) -> MobilityResult<&Vehicle> {
        self.vehicles
            .binary_search_by_key(&id, Vehicle::id)
            .map(|i| &self.vehicles[i])
            .map_err(|_| MobilityError::UnknownVehicle(id))
    }

    /// Number of vehicles still `Moving`.
    pub fn moving_count(&self) -> usize {
        self.vehicles.iter().filter(|v| v.state().is_moving()).count()
    }
}
