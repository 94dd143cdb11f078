//! Fluent builder for constructing a [`Sim`].

use toll_account::{AccountLedger, UserAccount};
use toll_core::{AreaBounds, GeoPoint, SimConfig, SimRng};
use toll_mobility::{Fleet, Vehicle, VehicleSpec};
use toll_spatial::{GateTable, TollGate};
use toll_spatial::zone::DEFAULT_RADIUS_DEG;

use crate::{Sim, SimError, SimResult, TollCalculator, TollPolicy};

/// Default vehicle speed, km per simulated hour.
pub const DEFAULT_SPEED_KMH: f64 = 60.0;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, tick duration, seed
/// - gate table and user accounts
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                         |
/// |----------------------------|---------------------------------|
/// | `.vehicle(spec)`           | no vehicles                     |
/// | `.speed_kmh(v)`            | 60                              |
/// | `.area(a)`                 | `AreaBounds::default()`         |
/// | `.policy(p)`               | `TollPolicy::ZoneRate`          |
/// | `.zone_radius_deg(r)`      | 0.001                           |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, gates, accounts)
///     .vehicle(VehicleSpec::new(VehicleId(1), UserId(1)))
///     .policy(TollPolicy::ZoneRate)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    gates:      Vec<TollGate>,
    accounts:   Vec<UserAccount>,
    vehicles:   Vec<(VehicleSpec, Option<(GeoPoint, GeoPoint)>)>,
    speed_kmh:  f64,
    area:       AreaBounds,
    policy:     TollPolicy,
    radius_deg: f64,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, gates: Vec<TollGate>, accounts: Vec<UserAccount>) -> Self {
        Self {
            config,
            gates,
            accounts,
            vehicles:   Vec::new(),
            speed_kmh:  DEFAULT_SPEED_KMH,
            area:       AreaBounds::default(),
            policy:     TollPolicy::default(),
            radius_deg: DEFAULT_RADIUS_DEG,
        }
    }

    /// Add a vehicle whose start and end points are drawn at random inside
    /// the area.
    pub fn vehicle(mut self, spec: VehicleSpec) -> Self {
        self.vehicles.push((spec, None));
        self
    }

    /// Add a vehicle with fixed start and end points.
    pub fn vehicle_between(mut self, spec: VehicleSpec, start: GeoPoint, end: GeoPoint) -> Self {
        self.vehicles.push((spec, Some((start, end))));
        self
    }

    pub fn speed_kmh(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = speed_kmh;
        self
    }

    /// Area random start/end points are drawn from.
    pub fn area(mut self, area: AreaBounds) -> Self {
        self.area = area;
        self
    }

    pub fn policy(mut self, policy: TollPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn zone_radius_deg(mut self, radius_deg: f64) -> Self {
        self.radius_deg = radius_deg;
        self
    }

    /// Validate inputs, draw start/end points, build routes, and return a
    /// ready-to-run [`Sim`].
    ///
    /// Random points are drawn in ascending `VehicleId` order, start before
    /// end, from a `SimRng` seeded with `config.seed`.
    ///
    /// # Errors
    ///
    /// Any configuration defect fails here: invalid config values, duplicate
    /// ids, a vehicle owned by an unknown user, a missing flat fee, or a
    /// degenerate route.
    pub fn build(mut self) -> SimResult<Sim> {
        self.config.validate()?;
        if !self.speed_kmh.is_finite() || self.speed_kmh <= 0.0 {
            return Err(SimError::Config(format!(
                "speed must be a positive number of km/h, got {}",
                self.speed_kmh
            )));
        }

        let area       = AreaBounds::new(self.area.origin, self.area.size)?;
        let gates      = GateTable::new(self.gates)?;
        let ledger     = AccountLedger::new(self.accounts)?;
        let calculator = TollCalculator::new(self.policy, self.radius_deg)?;

        // ── Resolve owners and build vehicles ─────────────────────────────
        self.vehicles.sort_by_key(|(spec, _)| spec.id);
        let mut rng = SimRng::new(self.config.seed);
        let mut vehicles = Vec::with_capacity(self.vehicles.len());
        for (spec, endpoints) in &self.vehicles {
            let account = ledger.get(spec.owner)?;
            if let TollPolicy::FlatFeeOverride(schedule) = calculator.policy() {
                if !spec.non_toll && schedule.fee(spec.owner).is_none() {
                    return Err(SimError::NoFlatFee(spec.owner));
                }
            }

            let (start, end) = match endpoints {
                Some(pair) => *pair,
                None => {
                    let start = rng.point_in_area(&area);
                    let end   = rng.point_in_area(&area);
                    (start, end)
                }
            };

            vehicles.push(Vehicle::new(
                spec,
                account.vehicle_kind.clone(),
                account.trip_km,
                start,
                end,
                &gates,
            )?);
        }
        let fleet = Fleet::new(vehicles)?;

        log::debug!(
            "built sim: {} gate(s), {} account(s), {} vehicle(s), {} tick(s)",
            gates.len(),
            ledger.len(),
            fleet.len(),
            self.config.total_ticks
        );

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            gates,
            ledger,
            fleet,
            calculator,
            speed_kmh: self.speed_kmh,
        })
    }
}
