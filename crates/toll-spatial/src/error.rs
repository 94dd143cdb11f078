//! Spatial-subsystem error type.

use thiserror::Error;

use toll_core::GateId;

/// Errors produced by `toll-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("route needs at least two distinct points, got {points} point(s) spanning {length_km} km")]
    DegenerateRoute { points: usize, length_km: f64 },

    #[error("gate zone radius must be a positive finite number of degrees, got {0}")]
    InvalidRadius(f64),

    #[error("gate {0} not found in gate table")]
    UnknownGate(GateId),

    #[error("gate {0} appears more than once in gate table")]
    DuplicateGate(GateId),

    #[error("gate {id} has invalid rate {rate} per km")]
    InvalidRate { id: GateId, rate: f64 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
