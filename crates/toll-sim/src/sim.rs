//! The `Sim` struct and its tick loop.

use toll_account::AccountLedger;
use toll_core::{SimClock, SimConfig, Tick};
use toll_mobility::Fleet;
use toll_spatial::GateTable;

use crate::{SimObserver, SimReport, SimResult, TollCalculator, TollEvent, VehicleReport};

/// The main simulation runner.
///
/// `Sim` owns all run state.  In particular it owns the [`AccountLedger`]:
/// vehicles only know their owner's `UserId`, and every deduction is routed
/// through [`AccountLedger::charge`] once per vehicle per tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    /// Horizon, tick duration, seed.
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// Immutable gate table.
    pub gates: GateTable,

    /// User accounts.  Mutated only by toll deductions.
    pub ledger: AccountLedger,

    /// All vehicles in stepping order.
    pub fleet: Fleet,

    /// Zone geometry plus the active toll policy.
    pub calculator: TollCalculator,

    /// Vehicle speed in km per simulated hour.
    pub speed_kmh: f64,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Never stops early: ticks after every vehicle has arrived still
    /// happen (and still reach the observer).
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.  Does not call
    /// `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Distance every moving vehicle covers in one tick, in km.
    #[inline]
    pub fn step_km(&self) -> f64 {
        self.speed_kmh * self.clock.tick_hours()
    }

    /// Snapshot the final (or current) state for output consumers.
    pub fn report(&self) -> SimResult<SimReport> {
        let vehicles = self
            .fleet
            .iter()
            .map(|v| -> SimResult<VehicleReport> {
                Ok(VehicleReport {
                    id:                v.id(),
                    owner:             v.owner(),
                    kind:              v.kind().clone(),
                    non_toll:          v.non_toll(),
                    start:             v.start(),
                    end:               v.end(),
                    route:             v.route().points().to_vec(),
                    trip_km:           v.trip_km(),
                    traveled_km:       v.traveled_km(),
                    arrived:           !v.state().is_moving(),
                    remaining_balance: self.ledger.balance(v.owner())?,
                })
            })
            .collect::<SimResult<Vec<_>>>()?;

        Ok(SimReport {
            final_tick: self.clock.current_tick,
            gates:      self.gates.iter().cloned().collect(),
            vehicles,
        })
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let moving = self.process_tick(now, observer)?;
        observer.on_tick_end(now, moving);
        self.clock.advance();
        Ok(())
    }

    /// Advance, assess, and charge every moving vehicle once.
    ///
    /// Returns the number of vehicles still moving afterwards.
    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<usize> {
        let step_km = self.step_km();

        // Explicit field borrows so the borrow checker sees disjoint access.
        let gates      = &self.gates;
        let calculator = &self.calculator;
        let ledger     = &mut self.ledger;

        for vehicle in self.fleet.iter_mut() {
            let Some(advance) = vehicle.advance(step_km)? else {
                continue;
            };

            let assessment =
                calculator.assess(vehicle.route(), vehicle.owner(), vehicle.non_toll(), gates)?;
            for &gate in &assessment.gates_entered {
                observer.on_event(&TollEvent::GateEntered { tick: now, vehicle: vehicle.id(), gate });
            }

            let (toll, balance) = if vehicle.non_toll() {
                (0.0, ledger.balance(vehicle.owner())?)
            } else {
                (assessment.charged, ledger.charge(vehicle.owner(), assessment.charged)?)
            };

            observer.on_event(&TollEvent::VehicleAdvanced {
                tick:        now,
                vehicle:     vehicle.id(),
                distance_km: advance.distance_km,
                toll,
                balance,
            });
            if !vehicle.non_toll() {
                observer.on_event(&TollEvent::GatePassed { tick: now, vehicle: vehicle.id() });
            }
            if advance.arrived {
                observer.on_event(&TollEvent::VehicleArrived { tick: now, vehicle: vehicle.id() });
            }
        }

        Ok(self.fleet.moving_count())
    }
}
