//! Per-vehicle movement state.

/// A vehicle is either still travelling or done for the rest of the run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum VehicleState {
    /// Traveled distance is below the assigned trip length.
    #[default]
    Moving,
    /// Traveled distance reached the trip length.  Terminal.
    Arrived,
}

impl VehicleState {
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, VehicleState::Moving)
    }
}

impl std::fmt::Display for VehicleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            VehicleState::Moving  => "moving",
            VehicleState::Arrived => "arrived",
        })
    }
}
