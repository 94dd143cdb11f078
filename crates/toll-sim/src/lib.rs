//! `toll-sim` — tick loop orchestrator and toll calculation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   for vehicle in fleet (ascending VehicleId):
//!     ① Advance  — skip if Arrived; otherwise step `speed * tick_hours` km
//!     ② Assess   — clip the route against every gate zone (GateEntered
//!                  for single-piece crossings), then apply the TollPolicy
//!     ③ Charge   — non-exempt: AccountLedger::charge(owner, toll)
//!     ④ Notify   — VehicleAdvanced, GatePassed if charged, plus
//!                  VehicleArrived on the final step
//! ```
//!
//! The loop always runs to `config.end_tick()`, even when every vehicle has
//! arrived.
//!
//! # Quick-start
//!
//! ```rust
//! use toll_core::SimConfig;
//! use toll_sim::{preset, EventLog};
//!
//! let mut sim = preset::builder(SimConfig::default()).build().unwrap();
//! let mut log = EventLog::default();
//! sim.run(&mut log).unwrap();
//!
//! let report = sim.report().unwrap();
//! assert_eq!(report.vehicles[0].traveled_km, 8.0);
//! assert_eq!(report.vehicles[0].remaining_balance, 6000.0 - 8.0 * 60.0);
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod preset;
pub mod report;
pub mod sim;
pub mod toll;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::TollEvent;
pub use observer::{EventLog, NoopObserver, SimObserver};
pub use report::{SimReport, VehicleReport};
pub use sim::Sim;
pub use toll::{FlatFeeSchedule, TollAssessment, TollCalculator, TollPolicy};
