use thiserror::Error;

use toll_core::VehicleId;
use toll_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("vehicle {0} appears more than once in the fleet")]
    DuplicateVehicle(VehicleId),

    #[error("vehicle {0} not found in the fleet")]
    UnknownVehicle(VehicleId),

    #[error("vehicle {vehicle} has invalid trip length {trip_km} km")]
    InvalidTrip { vehicle: VehicleId, trip_km: f64 },

    #[error("invalid step of {0} km: must be finite and positive")]
    InvalidStep(f64),

    #[error("route error: {0}")]
    Route(#[from] SpatialError),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
