//! Per-user account state.

use toll_core::{UserId, VehicleKind};

/// One user's account.
///
/// `balance` is the only field that changes during a run, and only through
/// [`AccountLedger::charge`][crate::AccountLedger::charge].
#[derive(Clone, Debug, PartialEq)]
pub struct UserAccount {
    pub id:           UserId,
    /// Currency units.  Monotonically non-increasing over a run.
    pub balance:      f64,
    pub vehicle_kind: VehicleKind,
    /// Trip length assigned to this user's vehicle, in kilometres.
    pub trip_km:      f64,
}

impl UserAccount {
    pub fn new(id: UserId, balance: f64, vehicle_kind: VehicleKind, trip_km: f64) -> Self {
        Self { id, balance, vehicle_kind, trip_km }
    }
}
