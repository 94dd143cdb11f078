//! TOML scenario files.
//!
//! Every field is optional; anything left out falls back to the built-in
//! Bangalore preset.  See `scenario.toml` next to `Cargo.toml` for the full
//! preset written out.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use toll_account::UserAccount;
use toll_core::{AreaBounds, GateId, GeoPoint, SimConfig, UserId, VehicleId, VehicleKind};
use toll_mobility::VehicleSpec;
use toll_sim::{preset, FlatFeeSchedule, SimBuilder, TollPolicy};
use toll_spatial::zone::DEFAULT_RADIUS_DEG;
use toll_spatial::TollGate;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub seed:               u64,
    pub ticks:              u64,
    pub tick_duration_secs: u32,
    pub speed_kmh:          f64,
    /// Charge each user's `flat_fee` instead of the zone toll.
    pub flat_fee_override:  bool,
    pub zone_radius_deg:    f64,
    pub area:               AreaBounds,
    pub gates:              Vec<GateRow>,
    pub users:              Vec<UserRow>,
    pub vehicles:           Vec<VehicleRow>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateRow {
    pub id:          u32,
    pub lat:         f64,
    pub lon:         f64,
    pub rate_per_km: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserRow {
    pub id:           u32,
    pub balance:      f64,
    pub vehicle_kind: VehicleKind,
    pub trip_km:      f64,
    /// Only used when `flat_fee_override` is on.
    #[serde(default)]
    pub flat_fee:     Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleRow {
    pub id:       u32,
    pub owner:    u32,
    #[serde(default)]
    pub non_toll: bool,
    /// Fixed endpoints; both or neither.  Drawn from `area` when absent.
    #[serde(default)]
    pub start:    Option<GeoPoint>,
    #[serde(default)]
    pub end:      Option<GeoPoint>,
}

impl Default for Scenario {
    fn default() -> Self {
        let config = preset::config();
        let fees = preset::flat_fees();
        Self {
            seed:               config.seed,
            ticks:              config.total_ticks,
            tick_duration_secs: config.tick_duration_secs,
            speed_kmh:          preset::SPEED_KMH,
            flat_fee_override:  true,
            zone_radius_deg:    DEFAULT_RADIUS_DEG,
            area:               AreaBounds { origin: preset::AREA_ORIGIN, size: preset::AREA_SIZE },
            gates:              preset::gates()
                .into_iter()
                .map(|g| GateRow {
                    id:          g.id.0,
                    lat:         g.location.lat,
                    lon:         g.location.lon,
                    rate_per_km: g.rate_per_km,
                })
                .collect(),
            users:              preset::accounts()
                .into_iter()
                .map(|a| UserRow {
                    id:           a.id.0,
                    balance:      a.balance,
                    trip_km:      a.trip_km,
                    flat_fee:     fees.fee(a.id),
                    vehicle_kind: a.vehicle_kind,
                })
                .collect(),
            vehicles:           preset::vehicles()
                .into_iter()
                .map(|v| VehicleRow {
                    id:       v.id.0,
                    owner:    v.owner.0,
                    non_toll: v.non_toll,
                    start:    None,
                    end:      None,
                })
                .collect(),
        }
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing scenario {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Command-line overrides win over the file.
    pub fn apply_overrides(&mut self, seed: Option<u64>, ticks: Option<u64>, zone_rate: bool) {
        if let Some(seed) = seed {
            self.seed = seed;
        }
        if let Some(ticks) = ticks {
            self.ticks = ticks;
        }
        if zone_rate {
            self.flat_fee_override = false;
        }
    }

    pub fn config(&self) -> SimConfig {
        SimConfig {
            tick_duration_secs: self.tick_duration_secs,
            total_ticks:        self.ticks,
            seed:               self.seed,
        }
    }

    pub fn policy(&self) -> TollPolicy {
        if self.flat_fee_override {
            TollPolicy::FlatFeeOverride(FlatFeeSchedule::new(
                self.users
                    .iter()
                    .filter_map(|u| u.flat_fee.map(|fee| (UserId(u.id), fee))),
            ))
        } else {
            TollPolicy::ZoneRate
        }
    }

    /// Translate the tables into a ready-to-build [`SimBuilder`].
    ///
    /// Fails on a vehicle with only one fixed endpoint; everything else is
    /// validated by `SimBuilder::build`.
    pub fn builder(&self) -> Result<SimBuilder> {
        let gates = self
            .gates
            .iter()
            .map(|g| TollGate::new(GateId(g.id), GeoPoint::new(g.lat, g.lon), g.rate_per_km))
            .collect();
        let accounts = self
            .users
            .iter()
            .map(|u| UserAccount::new(UserId(u.id), u.balance, u.vehicle_kind.clone(), u.trip_km))
            .collect();

        let mut builder = SimBuilder::new(self.config(), gates, accounts)
            .speed_kmh(self.speed_kmh)
            .area(self.area)
            .zone_radius_deg(self.zone_radius_deg)
            .policy(self.policy());

        for v in &self.vehicles {
            let mut spec = VehicleSpec::new(VehicleId(v.id), UserId(v.owner));
            if v.non_toll {
                spec = spec.exempt();
            }
            builder = match (v.start, v.end) {
                (Some(start), Some(end)) => builder.vehicle_between(spec, start, end),
                (None, None) => builder.vehicle(spec),
                _ => anyhow::bail!("vehicle {} needs both start and end, or neither", v.id),
            };
        }
        Ok(builder)
    }
}
