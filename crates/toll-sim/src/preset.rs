//! The built-in Bangalore scenario.
//!
//! Four gates in central Bangalore, a truck owner and a car owner, 100
//! one-minute ticks at 60 km/h, start/end points drawn from the one-degree
//! square north-east of (12°N, 77°E).  The flat-fee override is on, so each
//! moving tick costs user 1 a flat 60 and user 2 a flat 100.

use toll_account::UserAccount;
use toll_core::{AreaBounds, GateId, GeoPoint, SimConfig, UserId, VehicleId, VehicleKind};
use toll_mobility::VehicleSpec;
use toll_spatial::TollGate;

use crate::{FlatFeeSchedule, SimBuilder, TollPolicy};

pub const SIMULATION_TICKS: u64 = 100;
pub const SPEED_KMH: f64 = 60.0;
pub const AREA_SIZE: f64 = 100.0;

/// South-west corner of the sampling area, (lat, lon).
pub const AREA_ORIGIN: GeoPoint = GeoPoint { lat: 12.0, lon: 77.0 };

/// Map centre used by the renderer, (lat, lon).
pub const MAP_CENTER: GeoPoint = GeoPoint { lat: 12.9716, lon: 77.5946 };

/// 100 one-minute ticks with the default seed.
pub fn config() -> SimConfig {
    SimConfig { total_ticks: SIMULATION_TICKS, tick_duration_secs: 60, ..SimConfig::default() }
}

pub fn gates() -> Vec<TollGate> {
    vec![
        TollGate::new(GateId(1), GeoPoint::new(12.9716, 77.5899), 5.0),
        TollGate::new(GateId(2), GeoPoint::new(12.9781, 77.5946), 7.0),
        TollGate::new(GateId(3), GeoPoint::new(12.9750, 77.5800), 6.0),
        TollGate::new(GateId(4), GeoPoint::new(12.9680, 77.5850), 8.0),
    ]
}

pub fn accounts() -> Vec<UserAccount> {
    vec![
        UserAccount::new(UserId(1), 6000.0, VehicleKind::Truck, 8.0),
        UserAccount::new(UserId(2), 7000.0, VehicleKind::Car, 7.0),
    ]
}

/// Vehicle `n` is owned by user `n`; neither is exempt.
pub fn vehicles() -> Vec<VehicleSpec> {
    vec![
        VehicleSpec::new(VehicleId(1), UserId(1)),
        VehicleSpec::new(VehicleId(2), UserId(2)),
    ]
}

pub fn flat_fees() -> FlatFeeSchedule {
    FlatFeeSchedule::new([(UserId(1), 60.0), (UserId(2), 100.0)])
}

/// A builder pre-loaded with the whole preset.  `config` still controls
/// horizon, tick length, and seed.
pub fn builder(config: SimConfig) -> SimBuilder {
    vehicles()
        .into_iter()
        .fold(SimBuilder::new(config, gates(), accounts()), SimBuilder::vehicle)
        .speed_kmh(SPEED_KMH)
        .area(AreaBounds { origin: AREA_ORIGIN, size: AREA_SIZE })
        .policy(TollPolicy::FlatFeeOverride(flat_fees()))
}
